use core::fmt;
use rand::seq::SliceRandom;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Hand {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Hand {
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Paper, Hand::Scissors];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Hand::Rock),
            1 => Some(Hand::Paper),
            2 => Some(Hand::Scissors),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Menu key used to pick this hand (`'0'`, `'1'` or `'2'`).
    pub const fn key(self) -> char {
        match self {
            Hand::Rock => '0',
            Hand::Paper => '1',
            Hand::Scissors => '2',
        }
    }

    pub const fn from_key(key: char) -> Option<Self> {
        match key {
            '0' => Some(Hand::Rock),
            '1' => Some(Hand::Paper),
            '2' => Some(Hand::Scissors),
            _ => None,
        }
    }

    /// The hand this one defeats.
    pub const fn defeats(self) -> Hand {
        match self {
            Hand::Rock => Hand::Scissors,
            Hand::Paper => Hand::Rock,
            Hand::Scissors => Hand::Paper,
        }
    }

    pub const fn beats(self, other: Hand) -> bool {
        self.defeats() as u8 == other as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Hand::Rock => "Rock",
            Hand::Paper => "Paper",
            Hand::Scissors => "Scissors",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Hand::Rock => "✊",
            Hand::Paper => "✋",
            Hand::Scissors => "✌",
        }
    }

    /// Shuffles the three hands and returns the first two, so the pair is always distinct.
    pub fn draw_two<R: rand::Rng + ?Sized>(rng: &mut R) -> [Hand; 2] {
        let mut hands = Self::ALL;
        hands.shuffle(rng);
        [hands[0], hands[1]]
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.symbol())
    }
}
