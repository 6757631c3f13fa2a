//! Compiled-in alias tables, simplified and traditional rows.
//!
//! English requests fall back to the simplified row; the long-form English
//! text lives in the message files instead.

use crate::language::Language;

/// Alias table selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alias {
    Rank,
    EightTrigram,
    EightTrigramNature,
    FiveElement,
    FiveElementCompare,
    Stem,
    Branch,
    StemFiveElement,
    TenGod,
    TenGodRepresentative,
    YinYang,
    Animal,
    LunarMonth,
    LunarDay,
    SolarTerm,
    SoundFiveElement,
}

const RANK: [&[&str]; 2] = [
    &["非运", "大凶", "凶", "半吉", "吉", "大吉"],
    &["非運", "大兇", "兇", "半吉", "吉", "大吉"],
];
const EIGHT_TRIGRAM: [&[&str]; 2] = [
    &["坤", "艮", "坎", "巽", "震", "离", "兑", "乾"],
    &["坤", "艮", "坎", "巽", "震", "離", "兌", "乾"],
];
const EIGHT_TRIGRAM_NATURE: [&[&str]; 2] = [
    &["地", "山", "水", "风", "雷", "火", "泽", "天"],
    &["地", "山", "水", "風", "雷", "火", "澤", "天"],
];
const FIVE_ELEMENT: [&[&str]; 2] = [
    &["木", "火", "土", "金", "水"],
    &["木", "火", "土", "金", "水"],
];
const FIVE_ELEMENT_COMPARE: [&[&str]; 2] = [
    &["比劫", "食伤", "才财", "杀官", "枭印"],
    &["比劫", "食傷", "才財", "殺官", "梟印"],
];
const STEM: [&[&str]; 2] = [
    &["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"],
    &["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"],
];
const BRANCH: [&[&str]; 2] = [
    &[
        "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
    ],
    &[
        "子", "醜", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
    ],
];
const STEM_FIVE_ELEMENT: [&[&str]; 2] = [
    &[
        "甲木", "乙木", "丙火", "丁火", "戊土", "己土", "庚金", "辛金", "壬水", "癸水",
    ],
    &[
        "甲木", "乙木", "丙火", "丁火", "戊土", "己土", "庚金", "辛金", "壬水", "癸水",
    ],
];
const TEN_GOD: [&[&str]; 2] = [
    &[
        "比肩", "劫财", "食神", "伤官", "偏财", "正财", "七杀", "正官", "偏印", "正印",
    ],
    &[
        "比肩", "劫財", "食神", "傷官", "偏財", "正財", "七殺", "正官", "偏印", "正印",
    ],
];
const TEN_GOD_REPRESENTATIVE: [&[&str]; 2] = [
    &[
        "兄弟", "兄弟", "子孙", "子孙", "妻财", "妻财", "官鬼", "官鬼", "父母", "父母",
    ],
    &[
        "兄弟", "兄弟", "子孫", "子孫", "妻財", "妻財", "官鬼", "官鬼", "父母", "父母",
    ],
];
const YIN_YANG: [&[&str]; 2] = [&["阳", "阴"], &["陽", "陰"]];
const ANIMAL: [&[&str]; 2] = [
    &[
        "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
    ],
    &[
        "鼠", "牛", "虎", "兔", "龍", "蛇", "馬", "羊", "猴", "雞", "狗", "豬",
    ],
];
const LUNAR_MONTH: [&[&str]; 2] = [
    &[
        "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊", "",
    ],
    &[
        "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "臘", "",
    ],
];
const LUNAR_DAY: [&[&str]; 2] = [
    &[
        "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十", "十一",
        "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十", "廿一", "廿二",
        "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
    ],
    &[
        "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十", "十一",
        "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十", "廿一", "廿二",
        "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
    ],
];
const SOLAR_TERM: [&[&str]; 2] = [
    &[
        "小寒", "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种",
        "夏至", "小暑", "大暑", "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪",
        "大雪", "冬至",
    ],
    &[
        "小寒", "大寒", "立春", "雨水", "驚蟄", "春分", "清明", "穀雨", "立夏", "小滿", "芒種",
        "夏至", "小暑", "大暑", "立秋", "處暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪",
        "大雪", "冬至",
    ],
];
const SOUND_FIVE_ELEMENT: [&[&str]; 2] = [
    &[
        "海中金", "炉中火", "大林木", "路旁土", "剑锋金", "山头火", "涧下水", "城头土", "白蜡金",
        "杨柳木", "井泉水", "屋上土", "霹雳火", "松柏木", "长流水", "砂中金", "山下火", "平地木",
        "壁上土", "金箔金", "覆灯火", "天河水", "大驿土", "钗钏金", "桑柘木", "大溪水", "砂中土",
        "天上火", "石榴木", "大海水",
    ],
    &[
        "海中金", "爐中火", "大林木", "路旁土", "劍鋒金", "山頭火", "澗下水", "城頭土", "白蠟金",
        "楊柳木", "井泉水", "屋上土", "霹靂火", "松柏木", "長流水", "砂中金", "山下火", "平地木",
        "壁上土", "金箔金", "覆燈火", "天河水", "大驛土", "釵釧金", "桑柘木", "大溪水", "砂中土",
        "天上火", "石榴木", "大海水",
    ],
];

fn table(alias: Alias) -> [&'static [&'static str]; 2] {
    match alias {
        Alias::Rank => RANK,
        Alias::EightTrigram => EIGHT_TRIGRAM,
        Alias::EightTrigramNature => EIGHT_TRIGRAM_NATURE,
        Alias::FiveElement => FIVE_ELEMENT,
        Alias::FiveElementCompare => FIVE_ELEMENT_COMPARE,
        Alias::Stem => STEM,
        Alias::Branch => BRANCH,
        Alias::StemFiveElement => STEM_FIVE_ELEMENT,
        Alias::TenGod => TEN_GOD,
        Alias::TenGodRepresentative => TEN_GOD_REPRESENTATIVE,
        Alias::YinYang => YIN_YANG,
        Alias::Animal => ANIMAL,
        Alias::LunarMonth => LUNAR_MONTH,
        Alias::LunarDay => LUNAR_DAY,
        Alias::SolarTerm => SOLAR_TERM,
        Alias::SoundFiveElement => SOUND_FIVE_ELEMENT,
    }
}

/// Alias text for an index. Out-of-range indices yield `""`; languages with
/// no dedicated row fall back to the default language.
pub fn alias(kind: Alias, index: i64, language: Language) -> &'static str {
    let rows = table(kind);
    let row = if language.index() < rows.len() {
        rows[language.index()]
    } else {
        rows[Language::default().index()]
    };
    if index < 0 || index as usize >= row.len() {
        return "";
    }
    row[index as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_and_branches() {
        assert_eq!(alias(Alias::Stem, 0, Language::Simplified), "甲");
        assert_eq!(alias(Alias::Stem, 9, Language::Simplified), "癸");
        assert_eq!(alias(Alias::Branch, 0, Language::Simplified), "子");
        assert_eq!(alias(Alias::Branch, 11, Language::Traditional), "亥");
    }

    #[test]
    fn out_of_range_is_empty() {
        assert_eq!(alias(Alias::Stem, 10, Language::Simplified), "");
        assert_eq!(alias(Alias::Stem, -1, Language::Simplified), "");
        assert_eq!(alias(Alias::Rank, 6, Language::Simplified), "");
    }

    #[test]
    fn english_falls_back_to_simplified() {
        assert_eq!(alias(Alias::Animal, 4, Language::English), "龙");
        assert_eq!(alias(Alias::Animal, 4, Language::Traditional), "龍");
    }

    #[test]
    fn table_sizes() {
        assert_eq!(SOUND_FIVE_ELEMENT[0].len(), 30);
        assert_eq!(SOLAR_TERM[0].len(), 24);
        assert_eq!(LUNAR_DAY[0].len(), 30);
        assert_eq!(RANK[0].len(), 6);
    }
}
