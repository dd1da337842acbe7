//! The ten heavenly stems and twelve earthly branches.

const STEM_KO: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];
const STEM_HANJA: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
const STEM_LATIN: [&str; 10] = [
    "Gap", "Eul", "Byeong", "Jeong", "Mu", "Gi", "Gyeong", "Sin", "Im", "Gye",
];

const BRANCH_KO: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];
const BRANCH_HANJA: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
const BRANCH_LATIN: [&str; 12] = [
    "Ja", "Chuk", "In", "Myo", "Jin", "Sa", "Oh", "Mi", "Sin", "Yu", "Sul", "Hae",
];

const ANIMAL_KO: [&str; 12] = [
    "쥐", "소", "호랑이", "토끼", "용", "뱀", "말", "양", "원숭이", "닭", "개", "돼지",
];
const ANIMAL_KEY: [&str; 12] = [
    "rat", "ox", "tiger", "rabbit", "dragon", "snake", "horse", "sheep", "monkey", "rooster",
    "dog", "pig",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub const fn label(self) -> &'static str {
        match self {
            Element::Wood => "목(木)",
            Element::Fire => "화(火)",
            Element::Earth => "토(土)",
            Element::Metal => "금(金)",
            Element::Water => "수(水)",
        }
    }
}

/// Position in the ten-stem cycle, always in `0..10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stem(u8);

impl Stem {
    pub const COUNT: i64 = 10;

    /// Any integer, wrapped into the cycle.
    pub fn from_cycle(value: i64) -> Self {
        Stem(value.rem_euclid(Self::COUNT) as u8)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub fn korean(self) -> &'static str {
        STEM_KO[self.index()]
    }

    pub fn hanja(self) -> &'static str {
        STEM_HANJA[self.index()]
    }

    pub fn latin(self) -> &'static str {
        STEM_LATIN[self.index()]
    }

    /// Stems pair up per element, yang first.
    pub fn element(self) -> Element {
        match self.0 / 2 {
            0 => Element::Wood,
            1 => Element::Fire,
            2 => Element::Earth,
            3 => Element::Metal,
            _ => Element::Water,
        }
    }
}

/// Position in the twelve-branch cycle, always in `0..12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Branch(u8);

impl Branch {
    pub const COUNT: i64 = 12;

    pub fn from_cycle(value: i64) -> Self {
        Branch(value.rem_euclid(Self::COUNT) as u8)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub fn korean(self) -> &'static str {
        BRANCH_KO[self.index()]
    }

    pub fn hanja(self) -> &'static str {
        BRANCH_HANJA[self.index()]
    }

    pub fn latin(self) -> &'static str {
        BRANCH_LATIN[self.index()]
    }

    pub fn animal(self) -> &'static str {
        ANIMAL_KO[self.index()]
    }

    pub fn animal_key(self) -> &'static str {
        ANIMAL_KEY[self.index()]
    }
}
