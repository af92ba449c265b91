//! Pinyin unit → Zhuyin unit mapping table.
//!
//! Keys are pinyin syllable spellings (lowercase, `ü` written as `ü`) and the
//! five tone digits. Tone `1` maps to the empty string: first tone is left
//! unmarked in zhuyin.
//!
//! Some syllables are present under two spellings (`xien`/`xian`,
//! `tien`/`tian`, `jien`/`jian`, ...). Both are kept and convert to the same
//! zhuyin, so source data written either way is accepted.
use once_cell::sync::Lazy;
use phf::phf_map;

/// Every pinyin unit and its zhuyin rendering.
pub static PINYIN_TO_ZHUYIN: phf::Map<&'static str, &'static str> = phf_map! {
    // 6-letter syllables
    "zhuang" => "ㄓㄨㄤ",
    "shuang" => "ㄕㄨㄤ",
    "chuang" => "ㄔㄨㄤ",
    // 5-letter syllables
    "zhuan" => "ㄓㄨㄢ",
    "zhuai" => "ㄓㄨㄞ",
    "zhong" => "ㄓㄨㄥ",
    "zheng" => "ㄓㄥ",
    "zhang" => "ㄓㄤ",
    "xiong" => "ㄒㄩㄥ",
    "xiang" => "ㄒㄧㄤ",
    "shuan" => "ㄕㄨㄢ",
    "shuai" => "ㄕㄨㄞ",
    "sheng" => "ㄕㄥ",
    "shang" => "ㄕㄤ",
    "qiong" => "ㄑㄩㄥ",
    "qiang" => "ㄑㄧㄤ",
    "niang" => "ㄋㄧㄤ",
    "liang" => "ㄌㄧㄤ",
    "kuang" => "ㄎㄨㄤ",
    "jiong" => "ㄐㄩㄥ",
    "jiang" => "ㄐㄧㄤ",
    "huang" => "ㄏㄨㄤ",
    "guang" => "ㄍㄨㄤ",
    "chuan" => "ㄔㄨㄢ",
    "chuai" => "ㄔㄨㄞ",
    "chong" => "ㄔㄨㄥ",
    "cheng" => "ㄔㄥ",
    "chang" => "ㄔㄤ",
    // 4-letter syllables
    "zuan" => "ㄗㄨㄢ",
    "zong" => "ㄗㄨㄥ",
    "zhuo" => "ㄓㄨㄛ",
    "zhun" => "ㄓㄨㄣ",
    "zhui" => "ㄓㄨㄟ",
    "zhua" => "ㄓㄨㄚ",
    "zhou" => "ㄓㄡ",
    "zhen" => "ㄓㄣ",
    "zhei" => "ㄓㄟ",
    "zhao" => "ㄓㄠ",
    "zhan" => "ㄓㄢ",
    "zhai" => "ㄓㄞ",
    "zeng" => "ㄗㄥ",
    "zang" => "ㄗㄤ",
    "yuan" => "ㄩㄢ",
    "yong" => "ㄩㄥ",
    "ying" => "ㄧㄥ",
    "yang" => "ㄧㄤ",
    "xuan" => "ㄒㄩㄢ",
    "xing" => "ㄒㄧㄥ",
    "xien" => "ㄒㄧㄢ",
    "xiao" => "ㄒㄧㄠ",
    "xian" => "ㄒㄧㄢ",
    "wong" => "ㄨㄥ",
    "weng" => "ㄨㄥ",
    "wang" => "ㄨㄤ",
    "tuan" => "ㄊㄨㄢ",
    "tong" => "ㄊㄨㄥ",
    "ting" => "ㄊㄧㄥ",
    "tien" => "ㄊㄧㄢ",
    "tiao" => "ㄊㄧㄠ",
    "tian" => "ㄊㄧㄢ",
    "teng" => "ㄊㄥ",
    "tang" => "ㄊㄤ",
    "suan" => "ㄙㄨㄢ",
    "song" => "ㄙㄨㄥ",
    "shuo" => "ㄕㄨㄛ",
    "shun" => "ㄕㄨㄣ",
    "shui" => "ㄕㄨㄟ",
    "shua" => "ㄕㄨㄚ",
    "shou" => "ㄕㄡ",
    "shen" => "ㄕㄣ",
    "shei" => "ㄕㄟ",
    "shao" => "ㄕㄠ",
    "shan" => "ㄕㄢ",
    "shai" => "ㄕㄞ",
    "seng" => "ㄙㄥ",
    "sang" => "ㄙㄤ",
    "ruan" => "ㄖㄨㄢ",
    "rong" => "ㄖㄨㄥ",
    "reng" => "ㄖㄥ",
    "rang" => "ㄖㄤ",
    "quan" => "ㄑㄩㄢ",
    "qing" => "ㄑㄧㄥ",
    "qien" => "ㄑㄧㄢ",
    "qiao" => "ㄑㄧㄠ",
    "qian" => "ㄑㄧㄢ",
    "ping" => "ㄆㄧㄥ",
    "pien" => "ㄆㄧㄢ",
    "piao" => "ㄆㄧㄠ",
    "pian" => "ㄆㄧㄢ",
    "peng" => "ㄆㄥ",
    "pang" => "ㄆㄤ",
    "nuan" => "ㄋㄨㄢ",
    "nong" => "ㄋㄨㄥ",
    "ning" => "ㄋㄧㄥ",
    "nien" => "ㄋㄧㄢ",
    "niao" => "ㄋㄧㄠ",
    "nian" => "ㄋㄧㄢ",
    "neng" => "ㄋㄥ",
    "nang" => "ㄋㄤ",
    "ming" => "ㄇㄧㄥ",
    "mien" => "ㄇㄧㄢ",
    "miao" => "ㄇㄧㄠ",
    "mian" => "ㄇㄧㄢ",
    "meng" => "ㄇㄥ",
    "mang" => "ㄇㄤ",
    "luen" => "ㄌㄩㄢ",
    "luan" => "ㄌㄨㄢ",
    "long" => "ㄌㄨㄥ",
    "ling" => "ㄌㄧㄥ",
    "lien" => "ㄌㄧㄢ",
    "liao" => "ㄌㄧㄠ",
    "lian" => "ㄌㄧㄢ",
    "leng" => "ㄌㄥ",
    "lang" => "ㄌㄤ",
    "kuan" => "ㄎㄨㄢ",
    "kuai" => "ㄎㄨㄞ",
    "kong" => "ㄎㄨㄥ",
    "keng" => "ㄎㄥ",
    "kang" => "ㄎㄤ",
    "juan" => "ㄐㄩㄢ",
    "jing" => "ㄐㄧㄥ",
    "jien" => "ㄐㄧㄢ",
    "jiao" => "ㄐㄧㄠ",
    "jian" => "ㄐㄧㄢ",
    "huan" => "ㄏㄨㄢ",
    "huai" => "ㄏㄨㄞ",
    "hong" => "ㄏㄨㄥ",
    "heng" => "ㄏㄥ",
    "hang" => "ㄏㄤ",
    "guan" => "ㄍㄨㄢ",
    "guai" => "ㄍㄨㄞ",
    "gong" => "ㄍㄨㄥ",
    "geng" => "ㄍㄥ",
    "gang" => "ㄍㄤ",
    "fong" => "ㄈㄨㄥ",
    "fiao" => "ㄈㄧㄠ",
    "feng" => "ㄈㄥ",
    "fang" => "ㄈㄤ",
    "duan" => "ㄉㄨㄢ",
    "dong" => "ㄉㄨㄥ",
    "ding" => "ㄉㄧㄥ",
    "dien" => "ㄉㄧㄢ",
    "diao" => "ㄉㄧㄠ",
    "dian" => "ㄉㄧㄢ",
    "deng" => "ㄉㄥ",
    "dang" => "ㄉㄤ",
    "cuan" => "ㄘㄨㄢ",
    "cong" => "ㄘㄨㄥ",
    "chuo" => "ㄔㄨㄛ",
    "chun" => "ㄔㄨㄣ",
    "chui" => "ㄔㄨㄟ",
    "chua" => "ㄔㄨㄚ",
    "chou" => "ㄔㄡ",
    "chen" => "ㄔㄣ",
    "chao" => "ㄔㄠ",
    "chan" => "ㄔㄢ",
    "chai" => "ㄔㄞ",
    "ceng" => "ㄘㄥ",
    "cang" => "ㄘㄤ",
    "bing" => "ㄅㄧㄥ",
    "bien" => "ㄅㄧㄢ",
    "biao" => "ㄅㄧㄠ",
    "bian" => "ㄅㄧㄢ",
    "beng" => "ㄅㄥ",
    "bang" => "ㄅㄤ",
    // 3-letter syllables
    "zuo" => "ㄗㄨㄛ",
    "zun" => "ㄗㄨㄣ",
    "zui" => "ㄗㄨㄟ",
    "zou" => "ㄗㄡ",
    "zhu" => "ㄓㄨ",
    "zhi" => "ㄓ",
    "zhe" => "ㄓㄜ",
    "zha" => "ㄓㄚ",
    "zen" => "ㄗㄣ",
    "zei" => "ㄗㄟ",
    "zao" => "ㄗㄠ",
    "zan" => "ㄗㄢ",
    "zai" => "ㄗㄞ",
    "yun" => "ㄩㄣ",
    "yue" => "ㄩㄝ",
    "you" => "ㄧㄡ",
    "yin" => "ㄧㄣ",
    "yao" => "ㄧㄠ",
    "yan" => "ㄧㄢ",
    "yai" => "ㄧㄞ",
    "xun" => "ㄒㄩㄣ",
    "xue" => "ㄒㄩㄝ",
    "xiu" => "ㄒㄧㄡ",
    "xin" => "ㄒㄧㄣ",
    "xie" => "ㄒㄧㄝ",
    "xia" => "ㄒㄧㄚ",
    "wen" => "ㄨㄣ",
    "wei" => "ㄨㄟ",
    "wan" => "ㄨㄢ",
    "wai" => "ㄨㄞ",
    "tuo" => "ㄊㄨㄛ",
    "tun" => "ㄊㄨㄣ",
    "tui" => "ㄊㄨㄟ",
    "tou" => "ㄊㄡ",
    "tie" => "ㄊㄧㄝ",
    "tao" => "ㄊㄠ",
    "tan" => "ㄊㄢ",
    "tai" => "ㄊㄞ",
    "suo" => "ㄙㄨㄛ",
    "sun" => "ㄙㄨㄣ",
    "sui" => "ㄙㄨㄟ",
    "sou" => "ㄙㄡ",
    "shu" => "ㄕㄨ",
    "shi" => "ㄕ",
    "she" => "ㄕㄜ",
    "sha" => "ㄕㄚ",
    "sen" => "ㄙㄣ",
    "sei" => "ㄙㄟ",
    "sao" => "ㄙㄠ",
    "san" => "ㄙㄢ",
    "sai" => "ㄙㄞ",
    "ruo" => "ㄖㄨㄛ",
    "run" => "ㄖㄨㄣ",
    "rui" => "ㄖㄨㄟ",
    "rou" => "ㄖㄡ",
    "ren" => "ㄖㄣ",
    "rao" => "ㄖㄠ",
    "ran" => "ㄖㄢ",
    "qun" => "ㄑㄩㄣ",
    "que" => "ㄑㄩㄝ",
    "qiu" => "ㄑㄧㄡ",
    "qin" => "ㄑㄧㄣ",
    "qie" => "ㄑㄧㄝ",
    "qia" => "ㄑㄧㄚ",
    "pou" => "ㄆㄡ",
    "pin" => "ㄆㄧㄣ",
    "pie" => "ㄆㄧㄝ",
    "pen" => "ㄆㄣ",
    "pei" => "ㄆㄟ",
    "pao" => "ㄆㄠ",
    "pan" => "ㄆㄢ",
    "pai" => "ㄆㄞ",
    "nuo" => "ㄋㄨㄛ",
    "nüe" => "ㄋㄩㄝ",
    "nou" => "ㄋㄡ",
    "niu" => "ㄋㄧㄡ",
    "nin" => "ㄋㄧㄣ",
    "nie" => "ㄋㄧㄝ",
    "nen" => "ㄋㄣ",
    "nei" => "ㄋㄟ",
    "nao" => "ㄋㄠ",
    "nan" => "ㄋㄢ",
    "nai" => "ㄋㄞ",
    "mou" => "ㄇㄡ",
    "miu" => "ㄇㄧㄡ",
    "min" => "ㄇㄧㄣ",
    "mie" => "ㄇㄧㄝ",
    "men" => "ㄇㄣ",
    "mei" => "ㄇㄟ",
    "mao" => "ㄇㄠ",
    "man" => "ㄇㄢ",
    "mai" => "ㄇㄞ",
    "luo" => "ㄌㄨㄛ",
    "lun" => "ㄌㄨㄣ",
    "lüe" => "ㄌㄩㄝ",
    "lou" => "ㄌㄡ",
    "liu" => "ㄌㄧㄡ",
    "lin" => "ㄌㄧㄣ",
    "lie" => "ㄌㄧㄝ",
    "lia" => "ㄌㄧㄚ",
    "lei" => "ㄌㄟ",
    "lao" => "ㄌㄠ",
    "lan" => "ㄌㄢ",
    "lai" => "ㄌㄞ",
    "kuo" => "ㄎㄨㄛ",
    "kun" => "ㄎㄨㄣ",
    "kui" => "ㄎㄨㄟ",
    "kua" => "ㄎㄨㄚ",
    "kou" => "ㄎㄡ",
    "ken" => "ㄎㄣ",
    "kao" => "ㄎㄠ",
    "kan" => "ㄎㄢ",
    "kai" => "ㄎㄞ",
    "jun" => "ㄐㄩㄣ",
    "jue" => "ㄐㄩㄝ",
    "jiu" => "ㄐㄧㄡ",
    "jin" => "ㄐㄧㄣ",
    "jie" => "ㄐㄧㄝ",
    "jia" => "ㄐㄧㄚ",
    "huo" => "ㄏㄨㄛ",
    "hun" => "ㄏㄨㄣ",
    "hui" => "ㄏㄨㄟ",
    "hua" => "ㄏㄨㄚ",
    "hou" => "ㄏㄡ",
    "hen" => "ㄏㄣ",
    "hei" => "ㄏㄟ",
    "hao" => "ㄏㄠ",
    "han" => "ㄏㄢ",
    "hai" => "ㄏㄞ",
    "guo" => "ㄍㄨㄛ",
    "gun" => "ㄍㄨㄣ",
    "gui" => "ㄍㄨㄟ",
    "gua" => "ㄍㄨㄚ",
    "gou" => "ㄍㄡ",
    "gen" => "ㄍㄣ",
    "gei" => "ㄍㄟ",
    "gao" => "ㄍㄠ",
    "gan" => "ㄍㄢ",
    "gai" => "ㄍㄞ",
    "fou" => "ㄈㄡ",
    "fen" => "ㄈㄣ",
    "fei" => "ㄈㄟ",
    "fan" => "ㄈㄢ",
    "eng" => "ㄥ",
    "duo" => "ㄉㄨㄛ",
    "dun" => "ㄉㄨㄣ",
    "dui" => "ㄉㄨㄟ",
    "dou" => "ㄉㄡ",
    "diu" => "ㄉㄧㄡ",
    "die" => "ㄉㄧㄝ",
    "dei" => "ㄉㄟ",
    "dao" => "ㄉㄠ",
    "dan" => "ㄉㄢ",
    "dai" => "ㄉㄞ",
    "cuo" => "ㄘㄨㄛ",
    "cun" => "ㄘㄨㄣ",
    "cui" => "ㄘㄨㄟ",
    "cou" => "ㄘㄡ",
    "chu" => "ㄔㄨ",
    "chi" => "ㄔ",
    "che" => "ㄔㄜ",
    "cha" => "ㄔㄚ",
    "cen" => "ㄘㄣ",
    "cao" => "ㄘㄠ",
    "can" => "ㄘㄢ",
    "cai" => "ㄘㄞ",
    "bin" => "ㄅㄧㄣ",
    "bie" => "ㄅㄧㄝ",
    "ben" => "ㄅㄣ",
    "bei" => "ㄅㄟ",
    "bao" => "ㄅㄠ",
    "ban" => "ㄅㄢ",
    "bai" => "ㄅㄞ",
    "ang" => "ㄤ",
    // 2-letter syllables
    "zu" => "ㄗㄨ",
    "zi" => "ㄗ",
    "ze" => "ㄗㄜ",
    "za" => "ㄗㄚ",
    "yu" => "ㄩ",
    "yo" => "ㄧㄛ",
    "yi" => "ㄧ",
    "ye" => "ㄧㄝ",
    "ya" => "ㄧㄚ",
    "xu" => "ㄒㄩ",
    "xi" => "ㄒㄧ",
    "wu" => "ㄨ",
    "wo" => "ㄨㄛ",
    "wa" => "ㄨㄚ",
    "tu" => "ㄊㄨ",
    "ti" => "ㄊㄧ",
    "te" => "ㄊㄜ",
    "ta" => "ㄊㄚ",
    "su" => "ㄙㄨ",
    "si" => "ㄙ",
    "se" => "ㄙㄜ",
    "sa" => "ㄙㄚ",
    "ru" => "ㄖㄨ",
    "ri" => "ㄖ",
    "re" => "ㄖㄜ",
    "qu" => "ㄑㄩ",
    "qi" => "ㄑㄧ",
    "pu" => "ㄆㄨ",
    "po" => "ㄆㄛ",
    "pi" => "ㄆㄧ",
    "pa" => "ㄆㄚ",
    "ou" => "ㄡ",
    "nü" => "ㄋㄩ",
    "nu" => "ㄋㄨ",
    "ni" => "ㄋㄧ",
    "ne" => "ㄋㄜ",
    "na" => "ㄋㄚ",
    "mu" => "ㄇㄨ",
    "mo" => "ㄇㄛ",
    "mi" => "ㄇㄧ",
    "me" => "ㄇㄜ",
    "ma" => "ㄇㄚ",
    "lü" => "ㄌㄩ",
    "lu" => "ㄌㄨ",
    "li" => "ㄌㄧ",
    "le" => "ㄌㄜ",
    "la" => "ㄌㄚ",
    "ku" => "ㄎㄨ",
    "ke" => "ㄎㄜ",
    "ka" => "ㄎㄚ",
    "ju" => "ㄐㄩ",
    "ji" => "ㄐㄧ",
    "hu" => "ㄏㄨ",
    "he" => "ㄏㄜ",
    "ha" => "ㄏㄚ",
    "gu" => "ㄍㄨ",
    "ge" => "ㄍㄜ",
    "ga" => "ㄍㄚ",
    "fu" => "ㄈㄨ",
    "fo" => "ㄈㄛ",
    "fa" => "ㄈㄚ",
    "er" => "ㄦ",
    "en" => "ㄣ",
    "ei" => "ㄟ",
    "du" => "ㄉㄨ",
    "di" => "ㄉㄧ",
    "de" => "ㄉㄜ",
    "da" => "ㄉㄚ",
    "cu" => "ㄘㄨ",
    "ci" => "ㄘ",
    "ce" => "ㄘㄜ",
    "ca" => "ㄘㄚ",
    "bu" => "ㄅㄨ",
    "bo" => "ㄅㄛ",
    "bi" => "ㄅㄧ",
    "ba" => "ㄅㄚ",
    "ao" => "ㄠ",
    "an" => "ㄢ",
    "ai" => "ㄞ",
    // 1-letter syllables
    "o" => "ㄛ",
    "e" => "ㄜ",
    "a" => "ㄚ",
    // tone digits
    "5" => "˙",
    "4" => "ˋ",
    "3" => "ˇ",
    "2" => "ˊ",
    "1" => "",
};

static GLOBAL: Lazy<SyllableTable> = Lazy::new(SyllableTable::new);

/// Read-only view over [`PINYIN_TO_ZHUYIN`] that answers longest-prefix
/// queries.
///
/// Matching tries every prefix length from the longest unit length down to a
/// single character and looks each candidate up by key, so the longest unit
/// always wins no matter how the entries are laid out.
#[derive(Debug, Clone)]
pub struct SyllableTable {
    map: &'static phf::Map<&'static str, &'static str>,
    /// All keys, longest first (by char count), ties broken alphabetically.
    units: Vec<&'static str>,
    max_unit_chars: usize,
}

impl SyllableTable {
    /// Build the table view. Panics on malformed literal data.
    pub fn new() -> Self {
        let map = &PINYIN_TO_ZHUYIN;

        let mut units: Vec<&'static str> = map.keys().copied().collect();
        units.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        for unit in &units {
            assert!(!unit.is_empty(), "empty pinyin unit");
            assert!(
                unit.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == 'ü'),
                "pinyin unit '{unit}' is not lowercase pinyin"
            );
        }
        for (unit, zhuyin) in map.entries() {
            assert!(
                zhuyin.chars().all(hanzidict_core::is_zhuyin_char),
                "zhuyin for '{unit}' contains non-bopomofo symbols"
            );
        }
        for tone in ["1", "2", "3", "4", "5"] {
            assert!(map.contains_key(tone), "tone digit {tone} missing");
        }
        for pair in units.windows(2) {
            assert!(pair[0].chars().count() >= pair[1].chars().count());
        }

        let max_unit_chars = units.first().map_or(0, |u| u.chars().count());
        tracing::trace!(units = units.len(), max_unit_chars, "built syllable table");

        Self {
            map,
            units,
            max_unit_chars,
        }
    }

    /// The process-wide table, built on first access.
    pub fn global() -> &'static SyllableTable {
        &GLOBAL
    }

    /// Exact lookup of one unit.
    pub fn get(&self, unit: &str) -> Option<&'static str> {
        self.map.get(unit).copied()
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.map.contains_key(unit)
    }

    /// Longest unit that is a prefix of `input`, with its zhuyin.
    ///
    /// ```
    /// use libzhuyin::table::SyllableTable;
    ///
    /// let table = SyllableTable::global();
    /// assert_eq!(table.longest_prefix("zhuang1"), Some(("zhuang", "ㄓㄨㄤ")));
    /// assert_eq!(table.longest_prefix("xyz"), None);
    /// ```
    pub fn longest_prefix<'a>(&self, input: &'a str) -> Option<(&'a str, &'static str)> {
        // every prefix up to the longest unit length is looked up; the last
        // hit is the longest
        input
            .char_indices()
            .take(self.max_unit_chars)
            .filter_map(|(i, c)| {
                let candidate = &input[..i + c.len_utf8()];
                self.get(candidate).map(|zhuyin| (candidate, zhuyin))
            })
            .last()
    }

    /// Every unit, longest first.
    pub fn units(&self) -> &[&'static str] {
        &self.units
    }

    /// Syllable spellings only (tone digits excluded), longest first.
    pub fn syllables(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.units
            .iter()
            .copied()
            .filter(|u| !u.chars().all(|c| c.is_ascii_digit()))
    }

    pub fn max_unit_chars(&self) -> usize {
        self.max_unit_chars
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl PartialEq for SyllableTable {
    fn eq(&self, other: &Self) -> bool {
        self.units == other.units
            && self.units.iter().all(|u| self.get(u) == other.get(u))
    }
}

impl Eq for SyllableTable {}

impl Default for SyllableTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_digits_map_to_marks() {
        let t = SyllableTable::global();
        assert_eq!(t.get("1"), Some(""));
        assert_eq!(t.get("2"), Some("ˊ"));
        assert_eq!(t.get("3"), Some("ˇ"));
        assert_eq!(t.get("4"), Some("ˋ"));
        assert_eq!(t.get("5"), Some("˙"));
    }

    #[test]
    fn units_are_longest_first() {
        let t = SyllableTable::global();
        assert_eq!(t.max_unit_chars(), 6);
        assert_eq!(t.units().first().map(|u| u.len()), Some(6));
        assert!(t.units().iter().rev().take(5).all(|u| u.len() == 1));
        assert_eq!(t.len(), 426);
        assert_eq!(t.syllables().count(), 421);
    }

    #[test]
    fn longest_prefix_prefers_longer_units() {
        let t = SyllableTable::global();
        assert_eq!(t.longest_prefix("zhuang"), Some(("zhuang", "ㄓㄨㄤ")));
        assert_eq!(t.longest_prefix("zhuo3"), Some(("zhuo", "ㄓㄨㄛ")));
        assert_eq!(t.longest_prefix("zhu4"), Some(("zhu", "ㄓㄨ")));
        assert_eq!(t.longest_prefix("zh"), None);
        assert_eq!(t.longest_prefix(""), None);
    }

    #[test]
    fn longest_prefix_stops_at_longest_unit_length() {
        let t = SyllableTable::global();
        assert_eq!(t.longest_prefix("zhuangzhuang1"), Some(("zhuang", "ㄓㄨㄤ")));
        // "zhuanx" is no unit, the shorter hit is kept
        assert_eq!(t.longest_prefix("zhuanxyz"), Some(("zhuan", "ㄓㄨㄢ")));
        assert_eq!(t.longest_prefix("a5"), Some(("a", "ㄚ")));
        assert_eq!(t.longest_prefix("5a"), Some(("5", "˙")));
    }

    #[test]
    fn longest_prefix_handles_umlaut() {
        let t = SyllableTable::global();
        assert_eq!(t.longest_prefix("nüe4"), Some(("nüe", "ㄋㄩㄝ")));
        assert_eq!(t.longest_prefix("lü3"), Some(("lü", "ㄌㄩ")));
    }

    #[test]
    fn spelling_variants_are_both_present() {
        let t = SyllableTable::global();
        for (legacy, standard) in [
            ("xien", "xian"),
            ("tien", "tian"),
            ("qien", "qian"),
            ("nien", "nian"),
            ("mien", "mian"),
            ("bien", "bian"),
            ("pien", "pian"),
            ("lien", "lian"),
            ("jien", "jian"),
            ("dien", "dian"),
        ] {
            assert!(t.contains(legacy), "{legacy} missing");
            assert_eq!(t.get(legacy), t.get(standard));
        }
    }

    #[test]
    fn rebuilding_is_identical() {
        assert_eq!(SyllableTable::new(), SyllableTable::new());
        assert_eq!(&SyllableTable::new(), SyllableTable::global());
    }
}
