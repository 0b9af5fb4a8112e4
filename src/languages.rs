use std::collections::HashMap;
use std::sync::LazyLock;

use crate::record::NameOrder;
use NameOrder::{No, Unknown, Yes};

/// Display metadata for one Wikipedia language edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub name: &'static str,
    /// Script the reader can at least partly make sense of.
    pub familiar_script: bool,
    /// Whether titles usually put the given name before the surname.
    pub given_name_first: NameOrder,
}

/// Look up a language by its Wikipedia code (the `lang` attribute of an
/// interlanguage link). Codes are matched exactly.
pub fn lookup(code: &str) -> Option<&'static Language> {
    REGISTRY.get(code)
}

pub fn len() -> usize {
    REGISTRY.len()
}

static REGISTRY: LazyLock<HashMap<&'static str, Language>> = LazyLock::new(|| {
    LANGUAGES
        .iter()
        .map(|&(code, name, familiar_script, given_name_first)| {
            (
                code,
                Language {
                    name,
                    familiar_script,
                    given_name_first,
                },
            )
        })
        .collect()
});

// Codes and names follow the "List of Wikipedias" page. Deprecated and
// nonstandard codes that are still served (cz, dk, be-x-old, zh-yue, ...)
// map to the same name as their replacement.
#[rustfmt::skip]
const LANGUAGES: &[(&str, &str, bool, NameOrder)] = &[
    ("ab", "Abkhazian", true, Yes),
    ("ace", "Acehnese", true, Yes),
    ("ady", "Adyghe", true, Yes),
    ("af", "Afrikaans", true, Yes),
    ("ak", "Akan", true, Yes),
    ("als", "Alemannic", true, Yes),
    ("am", "Amharic", false, Unknown),
    ("an", "Aragonese", true, Yes),
    ("ang", "Anglo-Saxon", true, Yes),
    ("ar", "Arabic", true, Yes),
    ("arc", "Syriac", false, Unknown),
    ("arz", "Egyptian Arabic", true, Yes),
    ("as", "Assamese", false, Unknown),
    ("ast", "Asturian", true, Yes),
    ("atj", "Atikamekw", true, Yes),
    ("av", "Avar", true, Yes),
    ("awa", "Awadhi", false, Unknown),
    ("ay", "Aymara", true, Yes),
    ("az", "Azerbaijani", true, No),
    ("azb", "Southern Azerbaijani", true, No),
    ("ba", "Bashkir", true, No),
    ("ban", "Balinese", true, Yes),
    ("bar", "Bavarian", true, Yes),
    ("bat-smg", "Samogitian", true, Yes),
    ("bcl", "Central Bicolano", true, No),
    ("be", "Belarusian", true, Yes),
    ("be-tarask", "Belarusian (Taraškievica)", true, Yes),
    ("be-x-old", "Belarusian (Taraškievica)", true, Yes),
    ("bg", "Bulgarian", true, Yes),
    ("bh", "Bhojpuri", false, Unknown),
    ("bi", "Bislama", true, Yes),
    ("bjn", "Banjar", true, Yes),
    ("bm", "Bambara", true, Yes),
    ("bn", "Bengali", false, Unknown),
    ("bo", "Tibetan", false, Unknown),
    ("bpy", "Bishnupriya Manipuri", false, Unknown),
    ("br", "Breton", true, Yes),
    ("bs", "Bosnian", true, Yes),
    ("bug", "Buginese", true, Yes),
    ("bxr", "Buryat (Russia)", true, No),
    ("ca", "Catalan", true, Yes),
    ("cbk", "Zamboanga Chavacano", true, Yes),
    ("cbk-zam", "Zamboanga Chavacano", true, Yes),
    ("cdo", "Min Dong", true, Yes),
    ("ce", "Chechen", true, Yes),
    ("ceb", "Cebuano", true, Yes),
    ("ch", "Chamorro", true, Yes),
    ("chr", "Cherokee", false, Unknown),
    ("chy", "Cheyenne", true, Yes),
    ("ckb", "Sorani Kurdish", true, Yes),
    ("co", "Corsican", true, Yes),
    ("cr", "Cree", true, Yes),
    ("crh", "Crimean Tatar", true, No),
    ("cs", "Czech", true, Yes),
    ("csb", "Kashubian", true, Yes),
    ("cu", "Old Church Slavonic", true, Yes),
    ("cv", "Chuvash", true, Yes),
    ("cy", "Welsh", true, Yes),
    ("cz", "Czech", true, Yes),
    ("da", "Danish", true, Yes),
    ("de", "German", true, Yes),
    ("din", "Dinka", true, Yes),
    ("diq", "Zazaki", true, Yes),
    ("dk", "Danish", true, Yes),
    ("dsb", "Lower Sorbian", true, Yes),
    ("dty", "Doteli", false, Unknown),
    ("dv", "Divehi", false, Unknown),
    ("dz", "Dzongkha", false, Unknown),
    ("ee", "Ewe", true, Yes),
    ("el", "Greek", true, Yes),
    ("eml", "Emilian-Romagnol", true, Yes),
    ("en", "English", true, Yes),
    ("en-simple", "Simple English", true, Yes),
    ("eo", "Esperanto", true, Yes),
    ("es", "Spanish", true, Yes),
    ("et", "Estonian", true, Yes),
    ("eu", "Basque", true, Yes),
    ("ext", "Extremaduran", true, Yes),
    ("fa", "Persian", true, Yes),
    ("ff", "Fula", true, Yes),
    ("fi", "Finnish", true, Yes),
    ("fiu", "Võro", true, Yes),
    ("fiu-vro", "Võro", true, Yes),
    ("fj", "Fijian", true, Yes),
    ("fo", "Faroese", true, Yes),
    ("fr", "French", true, Yes),
    ("frp", "Franco-Provençal/Arpitan", true, Yes),
    ("frr", "North Frisian", true, Yes),
    ("fur", "Friulian", true, No),
    ("fy", "West Frisian", true, Yes),
    ("ga", "Irish", true, Yes),
    ("gag", "Gagauz", true, Yes),
    ("gan", "Gan Chinese", false, Unknown),
    ("gcr", "Guianan Creole", true, Yes),
    ("gd", "Scottish Gaelic", true, Yes),
    ("gl", "Galician", true, Yes),
    ("glk", "Gilaki", true, Yes),
    ("gn", "Guarani", true, Yes),
    ("gom", "Konkani", true, No),
    ("gor", "Gorontalo", true, Yes),
    ("got", "Gothic", false, Unknown),
    ("gsw", "Alemannic", true, Yes),
    ("gu", "Gujarati", false, Unknown),
    ("gv", "Manx", true, Yes),
    ("ha", "Hausa", true, Yes),
    ("hak", "Hakka", true, Yes),
    ("haw", "Hawaiian", true, Yes),
    ("he", "Hebrew", false, Unknown),
    ("hi", "Hindi", false, Unknown),
    ("hif", "Fiji Hindi", true, Yes),
    ("hr", "Croatian", true, Yes),
    ("hsb", "Upper Sorbian", true, Yes),
    ("ht", "Haitian", true, Yes),
    ("hu", "Hungarian", true, No),
    ("hy", "Armenian", false, Unknown),
    ("hyw", "Western Armenian", false, Unknown),
    ("ia", "Interlingua", true, Yes),
    ("id", "Indonesian", true, Yes),
    ("ie", "Interlingue", true, Yes),
    ("ig", "Igbo", true, Yes),
    ("ik", "Inupiak", true, Yes),
    ("ilo", "Ilokano", true, Yes),
    ("inh", "Ingush", true, No),
    ("io", "Ido", true, Yes),
    ("is", "Icelandic", true, Yes),
    ("it", "Italian", true, Yes),
    ("iu", "Inuktitut", false, Unknown),
    ("ja", "Japanese", false, Unknown),
    ("jam", "Jamaican", true, Yes),
    ("jbo", "Lojban", true, No),
    ("jv", "Javanese", true, Yes),
    ("ka", "Georgian", false, Unknown),
    ("kaa", "Karakalpak", true, Yes),
    ("kab", "Kabyle", true, Yes),
    ("kbd", "Kabardian", true, Yes),
    ("kbp", "Kabiye", true, Yes),
    ("kg", "Kongo", true, Yes),
    ("ki", "Kikuyu", true, Yes),
    ("kk", "Kazakh", true, No),
    ("kl", "Greenlandic", true, Yes),
    ("km", "Khmer", false, Unknown),
    ("kn", "Kannada language", false, Unknown),
    ("ko", "Korean", false, Unknown),
    ("koi", "Komi-Permyak", true, No),
    ("krc", "Karachay-Balkar", true, Yes),
    ("ks", "Kashmiri", false, Unknown),
    ("ksh", "Ripuarian", true, Yes),
    ("ku", "Kurdish (Kurmanji)", true, Yes),
    ("kv", "Komi", true, No),
    ("kw", "Cornish", true, Yes),
    ("ky", "Kyrgyz", true, Yes),
    ("la", "Latin", true, Yes),
    ("lad", "Ladino", true, Yes),
    ("lb", "Luxembourgish", true, Yes),
    ("lbe", "Lak", true, Yes),
    ("lez", "Lezgian", true, No),
    ("lfn", "Lingua Franca Nova", true, Yes),
    ("lg", "Luganda", true, Yes),
    ("li", "Limburgish", true, Yes),
    ("lij", "Ligurian", true, Yes),
    ("lmo", "Lombard", true, Yes),
    ("ln", "Lingala", true, Yes),
    ("lo", "Lao", false, Unknown),
    ("lrc", "Northern Luri", true, Yes),
    ("lt", "Lithuanian", true, Yes),
    ("ltg", "Latgalian", true, Yes),
    ("lv", "Latvian", true, Yes),
    ("lzh", "Classical Chinese", false, Unknown),
    ("mai", "Maithili", false, Unknown),
    ("map", "Banyumasan", true, Yes),
    ("map-bms", "Banyumasan", true, Yes),
    ("mdf", "Moksha", true, No),
    ("mg", "Malagasy", true, Yes),
    ("mhr", "Meadow Mari", true, No),
    ("mi", "Māori", true, Yes),
    ("min", "Minangkabau", true, Yes),
    ("mk", "Macedonian", true, Yes),
    ("ml", "Malayalam", false, Unknown),
    ("mn", "Mongolian", true, No),
    ("mnw", "Mon", false, Unknown),
    ("mo", "Romanian", true, Yes),
    ("mr", "Marathi", false, Unknown),
    ("mrj", "Hill Mari", true, No),
    ("ms", "Malay", true, Yes),
    ("mt", "Maltese", true, Yes),
    ("mwl", "Mirandese", true, Yes),
    ("my", "Burmese", false, Unknown),
    ("myv", "Erzya", true, No),
    ("mzn", "Mazandarani", true, Yes),
    ("na", "Nauruan", true, Yes),
    ("nah", "Nāhuatl", true, No),
    ("nan", "Min Nan", true, Yes),
    ("nap", "Neapolitan", true, Yes),
    ("nb", "Norwegian (Bokmål)", true, Yes),
    ("nds", "Low Saxon", true, Yes),
    ("nds-nl", "Dutch Low Saxon", true, Yes),
    ("nds-NL", "Dutch Low Saxon", true, Yes),
    ("ne", "Nepali", false, Unknown),
    ("new", "Newar / Nepal Bhasa", false, Unknown),
    ("nl", "Dutch", true, Yes),
    ("nn", "Norwegian (Nynorsk)", true, Yes),
    ("no", "Norwegian (Bokmål)", true, Yes),
    ("nov", "Novial", true, Yes),
    ("nqo", "N'Ko", false, Unknown),
    ("nrf", "Norman", true, Yes),
    ("nrm", "Norman", true, Yes),
    ("nso", "Northern Sotho", true, Yes),
    ("nv", "Navajo", true, No),
    ("ny", "Chichewa", true, Yes),
    ("oc", "Occitan", true, Yes),
    ("olo", "Livvi-Karelian", true, Yes),
    ("om", "Oromo", true, Yes),
    ("or", "Odia", false, Unknown),
    ("os", "Ossetian", true, Yes),
    ("pa", "Eastern Punjabi", false, Unknown),
    ("pag", "Pangasinan", true, Yes),
    ("pam", "Kapampangan", true, Yes),
    ("pap", "Papiamentu", true, Yes),
    ("pcd", "Picard", true, No),
    ("pdc", "Pennsylvania German", true, Yes),
    ("pfl", "Palatine German", true, Yes),
    ("pi", "Pali", false, Unknown),
    ("pih", "Norfolk", true, Yes),
    ("pl", "Polish", true, Yes),
    ("pms", "Piedmontese", true, Yes),
    ("pnb", "Western Punjabi", true, Yes),
    ("pnt", "Pontic", true, Yes),
    ("ps", "Pashto", true, No),
    ("pt", "Portuguese", true, Yes),
    ("qu", "Quechua", true, Yes),
    ("rm", "Romansh", true, Yes),
    ("rmy", "Vlax Romani", true, Yes),
    ("rn", "Kirundi", true, Yes),
    ("ro", "Romanian", true, Yes),
    ("roa", "Aromanian", true, Yes),
    ("roa-rup", "Aromanian", true, Yes),
    ("roa-tara", "Tarantino", true, Yes),
    ("ru", "Russian", true, Yes),
    ("rue", "Rusyn", true, Yes),
    ("rup", "Aromanian", true, Yes),
    ("rw", "Kinyarwanda", true, Yes),
    ("sa", "Sanskrit", false, Unknown),
    ("sah", "Sakha", true, No),
    ("sat", "Santali", false, Unknown),
    ("sc", "Sardinian", true, Yes),
    ("scn", "Sicilian", true, Yes),
    ("sco", "Scots", true, Yes),
    ("sd", "Sindhi", true, Yes),
    ("se", "Northern Sami", true, Yes),
    ("sg", "Sango", true, Yes),
    ("sgs", "Samogitian", true, Yes),
    ("sh", "Serbo-Croatian", true, Yes),
    ("shn", "Shan", false, Unknown),
    ("si", "Sinhalese", false, Unknown),
    ("simple", "Simple English", true, Yes),
    ("sk", "Slovak", true, Yes),
    ("sl", "Slovene", true, Yes),
    ("sm", "Samoan", true, Yes),
    ("sn", "Shona", true, Yes),
    ("so", "Somali", true, Yes),
    ("sq", "Albanian", true, Yes),
    ("sr", "Serbian", true, Yes),
    ("srn", "Sranan Tongo", true, Yes),
    ("ss", "Swati", true, No),
    ("st", "Sesotho", true, Yes),
    ("stq", "Saterland Frisian", true, Yes),
    ("su", "Sundanese", true, Yes),
    ("sv", "Swedish", true, Yes),
    ("sw", "Swahili", true, Yes),
    ("szl", "Silesian", true, Yes),
    ("szy", "Sakizaya", true, Yes),
    ("ta", "Tamil", false, Unknown),
    ("tcy", "Tulu", false, Unknown),
    ("te", "Telugu language", false, Unknown),
    ("tet", "Tetum", true, Yes),
    ("tg", "Tajik", true, Yes),
    ("th", "Thai", false, Unknown),
    ("ti", "Tigrinya", false, Unknown),
    ("tk", "Turkmen", true, Yes),
    ("tl", "Tagalog", true, Yes),
    ("tn", "Tswana", true, Yes),
    ("to", "Tongan", true, Yes),
    ("tpi", "Tok Pisin", true, Yes),
    ("tr", "Turkish", true, No),
    ("ts", "Tsonga", true, Yes),
    ("tt", "Tatar", true, No),
    ("tum", "Tumbuka", true, Yes),
    ("tw", "Twi", true, Yes),
    ("ty", "Tahitian", true, Yes),
    ("tyv", "Tuvan", true, Yes),
    ("udm", "Udmurt", true, No),
    ("ug", "Uyghur", true, Yes),
    ("uk", "Ukrainian", true, Yes),
    ("ur", "Urdu", true, Yes),
    ("uz", "Uzbek", true, No),
    ("ve", "Venda", true, Yes),
    ("vec", "Venetian", true, Yes),
    ("vep", "Veps", true, Yes),
    ("vi", "Vietnamese", true, Yes),
    ("vls", "West Flemish", true, Yes),
    ("vo", "Volapük", true, Yes),
    ("vro", "Võro", true, Yes),
    ("wa", "Walloon", true, Yes),
    ("war", "Waray", true, Yes),
    ("wo", "Wolof", true, Yes),
    ("wuu", "Wu", false, Unknown),
    ("xal", "Kalmyk", true, No),
    ("xh", "Xhosa", true, Yes),
    ("xmf", "Mingrelian", false, Unknown),
    ("yi", "Yiddish", false, Unknown),
    ("yo", "Yoruba", true, Yes),
    ("yue", "Cantonese", false, Unknown),
    ("za", "Zhuang", true, Yes),
    ("zea", "Zealandic", true, Yes),
    ("zh", "Chinese", false, Unknown),
    ("zh-classical", "Classical Chinese", false, Unknown),
    ("zh-min-nan", "Min Nan", true, Yes),
    ("zh-yue", "Cantonese", false, Unknown),
    ("zu", "Zulu", true, Yes),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::NameOrder::{No, Unknown, Yes};

    #[test]
    fn known_codes() {
        let fr = lookup("fr").unwrap();
        assert_eq!(fr.name, "French");
        assert!(fr.familiar_script);
        assert_eq!(fr.given_name_first, Yes);

        let hu = lookup("hu").unwrap();
        assert_eq!(hu.name, "Hungarian");
        assert_eq!(hu.given_name_first, No);

        let am = lookup("am").unwrap();
        assert!(!am.familiar_script);
        assert_eq!(am.given_name_first, Unknown);
    }

    #[test]
    fn aliases_share_a_name() {
        for (old, new) in [
            ("cz", "cs"),
            ("dk", "da"),
            ("be-x-old", "be-tarask"),
            ("zh-yue", "yue"),
            ("zh-min-nan", "nan"),
            ("simple", "en-simple"),
            ("nds-NL", "nds-nl"),
            ("fiu-vro", "vro"),
            ("roa-rup", "rup"),
        ] {
            assert_eq!(lookup(old).unwrap().name, lookup(new).unwrap().name, "{}", old);
        }
    }

    #[test]
    fn unknown_and_case_sensitive() {
        assert!(lookup("xx-unknown").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("FR").is_none());
    }

    #[test]
    fn every_code_listed_once() {
        assert_eq!(len(), LANGUAGES.len());
        assert!(len() > 300);
    }
}
