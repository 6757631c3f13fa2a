//! KangXi radical metadata.
//!
//! Index 0 is a placeholder; radicals 1..=214 follow the KangXi ordering.
//! The `code` field carries the original catalogue's numeric identifiers
//! unchanged; `frequency` is the rough count of characters filed under the
//! radical. Consumed by the character store and the animal-sign report.

use serde::Serialize;

/// One KangXi radical entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KangxiRadical {
    pub id: u16,
    pub code: u32,
    pub text: &'static str,
    pub strokes: u8,
    pub meaning: &'static str,
    pub frequency: u32,
}

/// Radical by KangXi index; out-of-range indices yield `None`.
pub fn radical(index: i64) -> Option<&'static KangxiRadical> {
    if (0..=214).contains(&index) {
        Some(&RADICALS[index as usize])
    } else {
        None
    }
}

pub(crate) const RADICALS: [KangxiRadical; 215] = [
    KangxiRadical { id: 0, code: 0, text: "", strokes: 0, meaning: "", frequency: 0 },
    KangxiRadical { id: 1, code: 21033, text: "一", strokes: 1, meaning: "one", frequency: 42 },
    KangxiRadical { id: 2, code: 21034, text: "丨", strokes: 1, meaning: "line", frequency: 21 },
    KangxiRadical { id: 3, code: 21035, text: "丶", strokes: 1, meaning: "dot", frequency: 10 },
    KangxiRadical { id: 4, code: 21036, text: "丿(乚、乛)", strokes: 1, meaning: "slash", frequency: 33 },
    KangxiRadical { id: 5, code: 21037, text: "乙(乀)", strokes: 1, meaning: "second", frequency: 42 },
    KangxiRadical { id: 6, code: 21038, text: "亅", strokes: 1, meaning: "hook", frequency: 19 },
    KangxiRadical { id: 7, code: 21039, text: "二", strokes: 2, meaning: "two", frequency: 29 },
    KangxiRadical { id: 8, code: 21040, text: "亠", strokes: 2, meaning: "lid", frequency: 38 },
    KangxiRadical { id: 9, code: 21041, text: "人(亻)", strokes: 2, meaning: "man", frequency: 794 },
    KangxiRadical { id: 10, code: 21042, text: "儿", strokes: 2, meaning: "son, legs", frequency: 52 },
    KangxiRadical { id: 11, code: 21043, text: "入", strokes: 2, meaning: "enter", frequency: 28 },
    KangxiRadical { id: 12, code: 21044, text: "八(丷)", strokes: 2, meaning: "eight", frequency: 44 },
    KangxiRadical { id: 13, code: 21045, text: "冂", strokes: 2, meaning: "wide", frequency: 50 },
    KangxiRadical { id: 14, code: 21046, text: "冖", strokes: 2, meaning: "cloth cover", frequency: 30 },
    KangxiRadical { id: 15, code: 21047, text: "冫", strokes: 2, meaning: "ice", frequency: 115 },
    KangxiRadical { id: 16, code: 21048, text: "几", strokes: 2, meaning: "table", frequency: 38 },
    KangxiRadical { id: 17, code: 21049, text: "凵", strokes: 2, meaning: "receptacle", frequency: 23 },
    KangxiRadical { id: 18, code: 21050, text: "刀(刂、⺈)", strokes: 2, meaning: "knife", frequency: 377 },
    KangxiRadical { id: 19, code: 21051, text: "力", strokes: 2, meaning: "power", frequency: 163 },
    KangxiRadical { id: 20, code: 21052, text: "勹", strokes: 2, meaning: "wrap", frequency: 64 },
    KangxiRadical { id: 21, code: 21053, text: "匕", strokes: 2, meaning: "spoon", frequency: 19 },
    KangxiRadical { id: 22, code: 21054, text: "匚", strokes: 2, meaning: "box", frequency: 64 },
    KangxiRadical { id: 23, code: 21055, text: "匸", strokes: 2, meaning: "hiding enclosure", frequency: 17 },
    KangxiRadical { id: 24, code: 21056, text: "十", strokes: 2, meaning: "ten", frequency: 55 },
    KangxiRadical { id: 25, code: 21057, text: "卜", strokes: 2, meaning: "divination", frequency: 45 },
    KangxiRadical { id: 26, code: 21058, text: "卩(㔾)", strokes: 2, meaning: "seal (device)", frequency: 40 },
    KangxiRadical { id: 27, code: 21059, text: "厂", strokes: 2, meaning: "cliff", frequency: 129 },
    KangxiRadical { id: 28, code: 21060, text: "厶", strokes: 2, meaning: "private", frequency: 40 },
    KangxiRadical { id: 29, code: 21061, text: "又", strokes: 2, meaning: "again", frequency: 91 },
    KangxiRadical { id: 30, code: 21062, text: "口", strokes: 3, meaning: "mouth", frequency: 1146 },
    KangxiRadical { id: 31, code: 21063, text: "囗", strokes: 3, meaning: "enclosure", frequency: 118 },
    KangxiRadical { id: 32, code: 21064, text: "土", strokes: 3, meaning: "earth", frequency: 580 },
    KangxiRadical { id: 33, code: 21065, text: "士", strokes: 3, meaning: "scholar", frequency: 24 },
    KangxiRadical { id: 34, code: 21066, text: "夂", strokes: 3, meaning: "go", frequency: 11 },
    KangxiRadical { id: 35, code: 21067, text: "夊", strokes: 3, meaning: "go slowly", frequency: 23 },
    KangxiRadical { id: 36, code: 21068, text: "夕", strokes: 3, meaning: "evening", frequency: 34 },
    KangxiRadical { id: 37, code: 21069, text: "大", strokes: 3, meaning: "big", frequency: 132 },
    KangxiRadical { id: 38, code: 21070, text: "女", strokes: 3, meaning: "woman", frequency: 681 },
    KangxiRadical { id: 39, code: 21071, text: "子", strokes: 3, meaning: "child", frequency: 83 },
    KangxiRadical { id: 40, code: 21072, text: "宀", strokes: 3, meaning: "roof", frequency: 246 },
    KangxiRadical { id: 41, code: 21073, text: "寸", strokes: 3, meaning: "inch", frequency: 40 },
    KangxiRadical { id: 42, code: 21074, text: "小(⺌、⺍)", strokes: 3, meaning: "small", frequency: 41 },
    KangxiRadical { id: 43, code: 21075, text: "尢(尣)", strokes: 3, meaning: "lame", frequency: 66 },
    KangxiRadical { id: 44, code: 21076, text: "尸", strokes: 3, meaning: "corpse", frequency: 148 },
    KangxiRadical { id: 45, code: 21077, text: "屮", strokes: 3, meaning: "sprout", frequency: 38 },
    KangxiRadical { id: 46, code: 21078, text: "山", strokes: 3, meaning: "mountain", frequency: 636 },
    KangxiRadical { id: 47, code: 21079, text: "巛(川)", strokes: 3, meaning: "river", frequency: 26 },
    KangxiRadical { id: 48, code: 21080, text: "工", strokes: 3, meaning: "work", frequency: 17 },
    KangxiRadical { id: 49, code: 21081, text: "己", strokes: 3, meaning: "oneself", frequency: 20 },
    KangxiRadical { id: 50, code: 21082, text: "巾", strokes: 3, meaning: "turban", frequency: 295 },
    KangxiRadical { id: 51, code: 21083, text: "干", strokes: 3, meaning: "dry", frequency: 9 },
    KangxiRadical { id: 52, code: 21084, text: "幺(么)", strokes: 3, meaning: "short thread", frequency: 50 },
    KangxiRadical { id: 53, code: 21085, text: "广", strokes: 3, meaning: "dotted cliff", frequency: 15 },
    KangxiRadical { id: 54, code: 21086, text: "廴", strokes: 3, meaning: "long stride", frequency: 9 },
    KangxiRadical { id: 55, code: 21087, text: "廾", strokes: 3, meaning: "arch", frequency: 50 },
    KangxiRadical { id: 56, code: 21088, text: "弋", strokes: 3, meaning: "shoot", frequency: 15 },
    KangxiRadical { id: 57, code: 21089, text: "弓", strokes: 3, meaning: "bow", frequency: 165 },
    KangxiRadical { id: 58, code: 21090, text: "彐(彑)", strokes: 3, meaning: "snout", frequency: 25 },
    KangxiRadical { id: 59, code: 21091, text: "彡", strokes: 3, meaning: "bristle", frequency: 62 },
    KangxiRadical { id: 60, code: 21092, text: "彳", strokes: 3, meaning: "step", frequency: 215 },
    KangxiRadical { id: 61, code: 21093, text: "心(忄、⺗)", strokes: 4, meaning: "heart", frequency: 1115 },
    KangxiRadical { id: 62, code: 21094, text: "戈", strokes: 4, meaning: "halberd", frequency: 116 },
    KangxiRadical { id: 63, code: 21095, text: "戶(户、戸)", strokes: 4, meaning: "door", frequency: 44 },
    KangxiRadical { id: 64, code: 21096, text: "手(扌、龵)", strokes: 4, meaning: "hand", frequency: 1203 },
    KangxiRadical { id: 65, code: 21097, text: "支", strokes: 4, meaning: "branch", frequency: 26 },
    KangxiRadical { id: 66, code: 21098, text: "攴(攵)", strokes: 4, meaning: "rap, tap", frequency: 296 },
    KangxiRadical { id: 67, code: 21099, text: "文", strokes: 4, meaning: "script", frequency: 26 },
    KangxiRadical { id: 68, code: 21100, text: "斗", strokes: 4, meaning: "dipper", frequency: 32 },
    KangxiRadical { id: 69, code: 21101, text: "斤", strokes: 4, meaning: "axe", frequency: 55 },
    KangxiRadical { id: 70, code: 21102, text: "方", strokes: 4, meaning: "square", frequency: 92 },
    KangxiRadical { id: 71, code: 21103, text: "无(旡)", strokes: 4, meaning: "not", frequency: 12 },
    KangxiRadical { id: 72, code: 21104, text: "日", strokes: 4, meaning: "sun", frequency: 453 },
    KangxiRadical { id: 73, code: 21105, text: "曰", strokes: 4, meaning: "say", frequency: 37 },
    KangxiRadical { id: 74, code: 21106, text: "月", strokes: 4, meaning: "moon", frequency: 69 },
    KangxiRadical { id: 75, code: 21107, text: "木", strokes: 4, meaning: "tree", frequency: 1369 },
    KangxiRadical { id: 76, code: 21108, text: "欠", strokes: 4, meaning: "lack", frequency: 235 },
    KangxiRadical { id: 77, code: 21109, text: "止", strokes: 4, meaning: "stop", frequency: 99 },
    KangxiRadical { id: 78, code: 21110, text: "歹(歺)", strokes: 4, meaning: "death", frequency: 231 },
    KangxiRadical { id: 79, code: 21111, text: "殳", strokes: 4, meaning: "weapon", frequency: 93 },
    KangxiRadical { id: 80, code: 21112, text: "毋(母)", strokes: 4, meaning: "do not", frequency: 16 },
    KangxiRadical { id: 81, code: 21113, text: "比", strokes: 4, meaning: "compare", frequency: 21 },
    KangxiRadical { id: 82, code: 21114, text: "毛", strokes: 4, meaning: "fur", frequency: 211 },
    KangxiRadical { id: 83, code: 21115, text: "氏", strokes: 4, meaning: "clan", frequency: 10 },
    KangxiRadical { id: 84, code: 21116, text: "气", strokes: 4, meaning: "steam", frequency: 17 },
    KangxiRadical { id: 85, code: 21117, text: "水(氵、氺)", strokes: 4, meaning: "water", frequency: 1595 },
    KangxiRadical { id: 86, code: 21118, text: "火(灬)", strokes: 4, meaning: "fire", frequency: 639 },
    KangxiRadical { id: 87, code: 21119, text: "爪(爫)", strokes: 4, meaning: "claw", frequency: 36 },
    KangxiRadical { id: 88, code: 21120, text: "父", strokes: 4, meaning: "father", frequency: 10 },
    KangxiRadical { id: 89, code: 21121, text: "爻", strokes: 4, meaning: "Trigrams", frequency: 16 },
    KangxiRadical { id: 90, code: 21122, text: "爿(丬)", strokes: 4, meaning: "split wood", frequency: 48 },
    KangxiRadical { id: 91, code: 21123, text: "片", strokes: 4, meaning: "slice", frequency: 77 },
    KangxiRadical { id: 92, code: 21124, text: "牙", strokes: 4, meaning: "fang", frequency: 9 },
    KangxiRadical { id: 93, code: 21125, text: "牛(牜、⺧)", strokes: 4, meaning: "cow", frequency: 233 },
    KangxiRadical { id: 94, code: 21126, text: "犬(犭)", strokes: 4, meaning: "dog", frequency: 444 },
    KangxiRadical { id: 95, code: 21127, text: "玄", strokes: 5, meaning: "profound", frequency: 6 },
    KangxiRadical { id: 96, code: 21128, text: "玉(王、玊)", strokes: 5, meaning: "jade", frequency: 473 },
    KangxiRadical { id: 97, code: 21129, text: "瓜", strokes: 5, meaning: "melon", frequency: 55 },
    KangxiRadical { id: 98, code: 21130, text: "瓦", strokes: 5, meaning: "tile", frequency: 174 },
    KangxiRadical { id: 99, code: 21131, text: "甘", strokes: 5, meaning: "sweet", frequency: 22 },
    KangxiRadical { id: 100, code: 21132, text: "生", strokes: 5, meaning: "life", frequency: 22 },
    KangxiRadical { id: 101, code: 21133, text: "用", strokes: 5, meaning: "use", frequency: 10 },
    KangxiRadical { id: 102, code: 21134, text: "田", strokes: 5, meaning: "field", frequency: 192 },
    KangxiRadical { id: 103, code: 21135, text: "疋(⺪)", strokes: 5, meaning: "bolt of cloth", frequency: 15 },
    KangxiRadical { id: 104, code: 21136, text: "疒", strokes: 5, meaning: "sickness", frequency: 526 },
    KangxiRadical { id: 105, code: 21137, text: "癶", strokes: 5, meaning: "footsteps", frequency: 15 },
    KangxiRadical { id: 106, code: 21138, text: "白", strokes: 5, meaning: "white", frequency: 109 },
    KangxiRadical { id: 107, code: 21139, text: "皮", strokes: 5, meaning: "skin", frequency: 94 },
    KangxiRadical { id: 108, code: 21140, text: "皿", strokes: 5, meaning: "dish", frequency: 129 },
    KangxiRadical { id: 109, code: 21141, text: "目(⺫)", strokes: 5, meaning: "eye", frequency: 647 },
    KangxiRadical { id: 110, code: 21142, text: "矛", strokes: 5, meaning: "spear", frequency: 65 },
    KangxiRadical { id: 111, code: 21143, text: "矢", strokes: 5, meaning: "arrow", frequency: 64 },
    KangxiRadical { id: 112, code: 21144, text: "石", strokes: 5, meaning: "stone", frequency: 499 },
    KangxiRadical { id: 113, code: 21145, text: "示(礻)", strokes: 5, meaning: "spirit", frequency: 213 },
    KangxiRadical { id: 114, code: 21146, text: "禸", strokes: 5, meaning: "track", frequency: 12 },
    KangxiRadical { id: 115, code: 21147, text: "禾", strokes: 5, meaning: "grain", frequency: 431 },
    KangxiRadical { id: 116, code: 21148, text: "穴", strokes: 5, meaning: "cave", frequency: 298 },
    KangxiRadical { id: 117, code: 21149, text: "立", strokes: 5, meaning: "stand", frequency: 101 },
    KangxiRadical { id: 118, code: 21150, text: "竹(⺮)", strokes: 6, meaning: "bamboo", frequency: 953 },
    KangxiRadical { id: 119, code: 21151, text: "米", strokes: 6, meaning: "rice", frequency: 318 },
    KangxiRadical { id: 120, code: 21152, text: "糸(糹)", strokes: 6, meaning: "silk", frequency: 823 },
    KangxiRadical { id: 121, code: 21153, text: "缶", strokes: 6, meaning: "jar", frequency: 77 },
    KangxiRadical { id: 122, code: 21154, text: "网(⺲、罓、⺳)", strokes: 6, meaning: "net", frequency: 163 },
    KangxiRadical { id: 123, code: 21155, text: "羊(⺶、⺷)", strokes: 6, meaning: "sheep", frequency: 156 },
    KangxiRadical { id: 124, code: 21156, text: "羽", strokes: 6, meaning: "feather", frequency: 220 },
    KangxiRadical { id: 125, code: 21157, text: "老(耂)", strokes: 6, meaning: "old", frequency: 22 },
    KangxiRadical { id: 126, code: 21158, text: "而", strokes: 6, meaning: "and", frequency: 22 },
    KangxiRadical { id: 127, code: 21159, text: "耒", strokes: 6, meaning: "plow", frequency: 84 },
    KangxiRadical { id: 128, code: 21160, text: "耳", strokes: 6, meaning: "ear", frequency: 172 },
    KangxiRadical { id: 129, code: 21161, text: "聿(⺺、⺻)", strokes: 6, meaning: "brush", frequency: 19 },
    KangxiRadical { id: 130, code: 21162, text: "肉(⺼)", strokes: 6, meaning: "meat", frequency: 674 },
    KangxiRadical { id: 131, code: 21163, text: "臣", strokes: 6, meaning: "minister", frequency: 16 },
    KangxiRadical { id: 132, code: 21164, text: "自", strokes: 6, meaning: "self", frequency: 34 },
    KangxiRadical { id: 133, code: 21165, text: "至", strokes: 6, meaning: "arrive", frequency: 24 },
    KangxiRadical { id: 134, code: 21166, text: "臼", strokes: 6, meaning: "mortar", frequency: 71 },
    KangxiRadical { id: 135, code: 21167, text: "舌", strokes: 6, meaning: "tongue", frequency: 31 },
    KangxiRadical { id: 136, code: 21168, text: "舛", strokes: 6, meaning: "oppose", frequency: 10 },
    KangxiRadical { id: 137, code: 21169, text: "舟", strokes: 6, meaning: "boat", frequency: 197 },
    KangxiRadical { id: 138, code: 21170, text: "艮", strokes: 6, meaning: "stopping", frequency: 5 },
    KangxiRadical { id: 139, code: 21171, text: "色", strokes: 6, meaning: "color", frequency: 21 },
    KangxiRadical { id: 140, code: 21172, text: "艸(⺿)", strokes: 6, meaning: "grass", frequency: 1902 },
    KangxiRadical { id: 141, code: 21173, text: "虍", strokes: 6, meaning: "tiger", frequency: 114 },
    KangxiRadical { id: 142, code: 21174, text: "虫", strokes: 6, meaning: "insect", frequency: 1067 },
    KangxiRadical { id: 143, code: 21175, text: "血", strokes: 6, meaning: "blood", frequency: 60 },
    KangxiRadical { id: 144, code: 21176, text: "行", strokes: 6, meaning: "walk enclosure", frequency: 53 },
    KangxiRadical { id: 145, code: 21177, text: "衣(⻂)", strokes: 6, meaning: "clothes", frequency: 607 },
    KangxiRadical { id: 146, code: 21178, text: "襾(西、覀)", strokes: 6, meaning: "cover", frequency: 29 },
    KangxiRadical { id: 147, code: 21179, text: "見", strokes: 7, meaning: "see", frequency: 161 },
    KangxiRadical { id: 148, code: 21180, text: "角(⻇)", strokes: 7, meaning: "horn", frequency: 158 },
    KangxiRadical { id: 149, code: 21181, text: "言(訁)", strokes: 7, meaning: "speech", frequency: 861 },
    KangxiRadical { id: 150, code: 21182, text: "谷", strokes: 7, meaning: "valley", frequency: 54 },
    KangxiRadical { id: 151, code: 21183, text: "豆", strokes: 7, meaning: "bean", frequency: 68 },
    KangxiRadical { id: 152, code: 21184, text: "豕", strokes: 7, meaning: "pig", frequency: 148 },
    KangxiRadical { id: 153, code: 21185, text: "豸", strokes: 7, meaning: "badger", frequency: 140 },
    KangxiRadical { id: 154, code: 21186, text: "貝", strokes: 7, meaning: "shell", frequency: 277 },
    KangxiRadical { id: 155, code: 21187, text: "赤", strokes: 7, meaning: "red", frequency: 31 },
    KangxiRadical { id: 156, code: 21188, text: "走", strokes: 7, meaning: "run", frequency: 285 },
    KangxiRadical { id: 157, code: 21189, text: "足(⻊)", strokes: 7, meaning: "foot", frequency: 580 },
    KangxiRadical { id: 158, code: 21190, text: "身", strokes: 7, meaning: "body", frequency: 97 },
    KangxiRadical { id: 159, code: 21191, text: "車", strokes: 7, meaning: "cart", frequency: 361 },
    KangxiRadical { id: 160, code: 21192, text: "辛", strokes: 7, meaning: "bitter", frequency: 36 },
    KangxiRadical { id: 161, code: 21193, text: "辰", strokes: 7, meaning: "morning", frequency: 15 },
    KangxiRadical { id: 162, code: 21194, text: "辵(⻌、⻍、⻎}})", strokes: 7, meaning: "walk", frequency: 381 },
    KangxiRadical { id: 163, code: 21195, text: "邑(⻏)", strokes: 7, meaning: "city", frequency: 350 },
    KangxiRadical { id: 164, code: 21196, text: "酉", strokes: 7, meaning: "wine", frequency: 290 },
    KangxiRadical { id: 165, code: 21197, text: "釆", strokes: 7, meaning: "distinguish", frequency: 14 },
    KangxiRadical { id: 166, code: 21198, text: "里", strokes: 7, meaning: "village", frequency: 14 },
    KangxiRadical { id: 167, code: 21199, text: "金(釒)", strokes: 8, meaning: "gold", frequency: 806 },
    KangxiRadical { id: 168, code: 21200, text: "長(镸)", strokes: 8, meaning: "long", frequency: 55 },
    KangxiRadical { id: 169, code: 21201, text: "門", strokes: 8, meaning: "gate", frequency: 246 },
    KangxiRadical { id: 170, code: 21202, text: "阜(⻖)", strokes: 8, meaning: "mound", frequency: 348 },
    KangxiRadical { id: 171, code: 21203, text: "隶", strokes: 8, meaning: "slave", frequency: 12 },
    KangxiRadical { id: 172, code: 21204, text: "隹", strokes: 8, meaning: "short-tailed bird", frequency: 233 },
    KangxiRadical { id: 173, code: 21205, text: "雨", strokes: 8, meaning: "rain", frequency: 298 },
    KangxiRadical { id: 174, code: 21206, text: "青(靑)", strokes: 8, meaning: "blue", frequency: 17 },
    KangxiRadical { id: 175, code: 21207, text: "非", strokes: 8, meaning: "wrong", frequency: 25 },
    KangxiRadical { id: 176, code: 21208, text: "面(靣)", strokes: 9, meaning: "face", frequency: 66 },
    KangxiRadical { id: 177, code: 21209, text: "革", strokes: 9, meaning: "leather", frequency: 305 },
    KangxiRadical { id: 178, code: 21210, text: "韋", strokes: 9, meaning: "tanned leather", frequency: 100 },
    KangxiRadical { id: 179, code: 21211, text: "韭", strokes: 9, meaning: "leek", frequency: 20 },
    KangxiRadical { id: 180, code: 21212, text: "音", strokes: 9, meaning: "sound", frequency: 43 },
    KangxiRadical { id: 181, code: 21213, text: "頁", strokes: 9, meaning: "leaf", frequency: 372 },
    KangxiRadical { id: 182, code: 21214, text: "風", strokes: 9, meaning: "wind", frequency: 182 },
    KangxiRadical { id: 183, code: 21215, text: "飛", strokes: 9, meaning: "fly", frequency: 92 },
    KangxiRadical { id: 184, code: 21216, text: "食(飠)", strokes: 9, meaning: "eat", frequency: 403 },
    KangxiRadical { id: 185, code: 21217, text: "首", strokes: 9, meaning: "head", frequency: 20 },
    KangxiRadical { id: 186, code: 21218, text: "香", strokes: 9, meaning: "fragrant", frequency: 37 },
    KangxiRadical { id: 187, code: 21219, text: "馬", strokes: 10, meaning: "horse", frequency: 472 },
    KangxiRadical { id: 188, code: 21220, text: "骨", strokes: 10, meaning: "bone", frequency: 185 },
    KangxiRadical { id: 189, code: 21221, text: "高(髙)", strokes: 10, meaning: "tall", frequency: 34 },
    KangxiRadical { id: 190, code: 21222, text: "髟", strokes: 10, meaning: "hair", frequency: 243 },
    KangxiRadical { id: 191, code: 21223, text: "鬥", strokes: 10, meaning: "fight", frequency: 23 },
    KangxiRadical { id: 192, code: 21224, text: "鬯", strokes: 10, meaning: "sacrificial wine", frequency: 8 },
    KangxiRadical { id: 193, code: 21225, text: "鬲", strokes: 10, meaning: "cauldron", frequency: 73 },
    KangxiRadical { id: 194, code: 21226, text: "鬼", strokes: 10, meaning: "ghost", frequency: 141 },
    KangxiRadical { id: 195, code: 21227, text: "魚", strokes: 11, meaning: "fish", frequency: 571 },
    KangxiRadical { id: 196, code: 21228, text: "鳥", strokes: 11, meaning: "bird", frequency: 750 },
    KangxiRadical { id: 197, code: 21229, text: "鹵", strokes: 11, meaning: "salt", frequency: 44 },
    KangxiRadical { id: 198, code: 21230, text: "鹿", strokes: 11, meaning: "deer", frequency: 104 },
    KangxiRadical { id: 199, code: 21231, text: "麥", strokes: 11, meaning: "wheat", frequency: 131 },
    KangxiRadical { id: 200, code: 21232, text: "麻", strokes: 11, meaning: "hemp", frequency: 34 },
    KangxiRadical { id: 201, code: 21233, text: "黃", strokes: 12, meaning: "yellow", frequency: 42 },
    KangxiRadical { id: 202, code: 21234, text: "黍", strokes: 12, meaning: "millet", frequency: 46 },
    KangxiRadical { id: 203, code: 21235, text: "黑", strokes: 12, meaning: "black", frequency: 172 },
    KangxiRadical { id: 204, code: 21236, text: "黹", strokes: 12, meaning: "embroidery", frequency: 8 },
    KangxiRadical { id: 205, code: 21237, text: "黽", strokes: 13, meaning: "frog", frequency: 40 },
    KangxiRadical { id: 206, code: 21238, text: "鼎", strokes: 13, meaning: "tripod", frequency: 14 },
    KangxiRadical { id: 207, code: 21239, text: "鼓", strokes: 13, meaning: "drum", frequency: 46 },
    KangxiRadical { id: 208, code: 21240, text: "鼠", strokes: 13, meaning: "rat", frequency: 92 },
    KangxiRadical { id: 209, code: 21241, text: "鼻", strokes: 14, meaning: "nose", frequency: 49 },
    KangxiRadical { id: 210, code: 21242, text: "齊(斉)", strokes: 14, meaning: "even", frequency: 18 },
    KangxiRadical { id: 211, code: 21243, text: "齒", strokes: 15, meaning: "tooth", frequency: 162 },
    KangxiRadical { id: 212, code: 21244, text: "龍", strokes: 16, meaning: "dragon", frequency: 14 },
    KangxiRadical { id: 213, code: 21245, text: "龜", strokes: 16, meaning: "turtle", frequency: 24 },
    KangxiRadical { id: 214, code: 21246, text: "龠", strokes: 17, meaning: "flute", frequency: 19 },];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_complete_and_indexed() {
        assert_eq!(RADICALS.len(), 215);
        for (i, r) in RADICALS.iter().enumerate() {
            assert_eq!(r.id as usize, i);
        }
    }

    #[test]
    fn lookup_bounds() {
        assert_eq!(radical(1).unwrap().text, "一");
        assert_eq!(radical(214).unwrap().meaning, "flute");
        assert!(radical(215).is_none());
        assert!(radical(-1).is_none());
    }

    #[test]
    fn known_radicals() {
        assert_eq!(radical(85).unwrap().meaning, "water");
        assert_eq!(radical(86).unwrap().meaning, "fire");
        assert_eq!(radical(140).unwrap().strokes, 6);
    }
}
