//! Deal configuration options.

use crate::card::DECK_SIZE;
use crate::error::DealError;

/// Configuration for a shuffle-and-deal session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::DealOptions;
///
/// let options = DealOptions::default()
///     .with_seed(7)
///     .with_hand_size(13)
///     .with_hand_count(4);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DealOptions {
    /// Seed for the shuffle.
    pub seed: u64,
    /// Number of cards in each hand.
    pub hand_size: usize,
    /// Number of hands to deal.
    pub hand_count: usize,
}

impl Default for DealOptions {
    fn default() -> Self {
        Self {
            seed: 1,
            hand_size: 5,
            hand_count: 5,
        }
    }
}

impl DealOptions {
    /// Sets the shuffle seed.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DealOptions;
    ///
    /// let options = DealOptions::default().with_seed(42);
    /// assert_eq!(options.seed, 42);
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the number of cards per hand.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DealOptions;
    ///
    /// let options = DealOptions::default().with_hand_size(7);
    /// assert_eq!(options.hand_size, 7);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the number of hands.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DealOptions;
    ///
    /// let options = DealOptions::default().with_hand_count(2);
    /// assert_eq!(options.hand_count, 2);
    /// ```
    #[must_use]
    pub const fn with_hand_count(mut self, hand_count: usize) -> Self {
        self.hand_count = hand_count;
        self
    }

    /// Returns the total number of cards the deal needs.
    #[must_use]
    pub const fn cards_needed(&self) -> usize {
        self.hand_size.saturating_mul(self.hand_count)
    }

    /// Checks that the options describe a deal a full deck can satisfy.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand size or count is zero, or if the hands
    /// need more than [`DECK_SIZE`] cards.
    pub const fn validate(&self) -> Result<(), DealError> {
        validate_deal(self.hand_size, self.hand_count, DECK_SIZE)
    }
}

/// Checks a deal of `hand_count` hands of `hand_size` cards against the
/// number of cards remaining.
pub(crate) const fn validate_deal(
    hand_size: usize,
    hand_count: usize,
    remaining: usize,
) -> Result<(), DealError> {
    if hand_size == 0 {
        return Err(DealError::ZeroHandSize);
    }
    if hand_count == 0 {
        return Err(DealError::ZeroHandCount);
    }

    let requested = hand_size.saturating_mul(hand_count);
    if requested > remaining {
        return Err(DealError::NotEnoughCards {
            requested,
            remaining,
        });
    }
    Ok(())
}
