use crate::cards::Rank;

/// The ten five-rank straight windows, lowest first, as rank values.
/// The wheel window uses the ace (14) as its low card.
pub const WINDOWS: [[u8; 5]; 10] = [
    [14, 2, 3, 4, 5],
    [2, 3, 4, 5, 6],
    [3, 4, 5, 6, 7],
    [4, 5, 6, 7, 8],
    [5, 6, 7, 8, 9],
    [6, 7, 8, 9, 10],
    [7, 8, 9, 10, 11],
    [8, 9, 10, 11, 12],
    [9, 10, 11, 12, 13],
    [10, 11, 12, 13, 14],
];

/// High-card value of the window at `index` in [`WINDOWS`]; the wheel is 5.
pub const fn window_high(index: usize) -> u8 {
    index as u8 + 5
}

/// Rank presence indexed by rank value (2-14).
pub fn presence(ranks: impl IntoIterator<Item = Rank>) -> [bool; 15] {
    let mut present = [false; 15];
    for r in ranks {
        present[r.value() as usize] = true;
    }
    present
}

/// Whether any window is fully present, and the best straight's high value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub high: Option<u8>,
}

impl StraightInfo {
    pub fn detect(present: &[bool; 15]) -> Self {
        let high = WINDOWS
            .iter()
            .enumerate()
            .rev()
            .find(|(_, w)| w.iter().all(|&v| present[v as usize]))
            .map(|(i, _)| window_high(i));
        StraightInfo { is_straight: high.is_some(), high }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(ranks: &[Rank]) -> StraightInfo {
        StraightInfo::detect(&presence(ranks.iter().copied()))
    }

    #[test]
    fn test_regular_straight() {
        let i = info(&[Rank::King, Rank::Queen, Rank::Jack, Rank::Ten, Rank::Nine]);
        assert!(i.is_straight);
        assert_eq!(i.high, Some(13));
    }

    #[test]
    fn test_ace_high_straight() {
        let i = info(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten]);
        assert_eq!(i.high, Some(14));
    }

    #[test]
    fn test_wheel_is_five_high() {
        let i = info(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]);
        assert!(i.is_straight);
        assert_eq!(i.high, Some(5));
    }

    #[test]
    fn test_six_high_beats_wheel_in_same_cards() {
        let i = info(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six]);
        assert_eq!(i.high, Some(6));
    }

    #[test]
    fn test_not_straight() {
        let i = info(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Nine, Rank::Two]);
        assert!(!i.is_straight);
        assert_eq!(i.high, None);
    }

    #[test]
    fn test_window_highs() {
        assert_eq!(window_high(0), 5);
        assert_eq!(window_high(9), 14);
        assert_eq!(WINDOWS[9][4], 14);
    }
}
