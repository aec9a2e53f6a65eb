//! Data Memory.
//!
//! This module provides the word-addressable data segment. It performs the following:
//! 1. **Address Validation:** Rejects misaligned, out-of-range and (optionally)
//!    program-region addresses before any access.
//! 2. **Storage:** Holds one signed 32-bit value per aligned word.
//! 3. **Change Tracking:** Records every store made during the current cycle
//!    (the per-cycle "delta") for reporting.

use std::collections::BTreeMap;

use crate::common::constants::WORD_BYTES;
use crate::common::error::SimError;

/// Flat word-addressable data segment with a per-cycle change log.
///
/// All addresses are byte addresses; only word-aligned accesses are legal.
#[derive(Clone, Debug)]
pub struct DataMemory {
    words: Vec<i32>,
    delta: BTreeMap<u32, i32>,
    /// Addresses below this are reserved for the program image.
    protected_below: u32,
}

impl DataMemory {
    /// Creates a zero-filled data segment of `data_bytes` bytes.
    ///
    /// # Arguments
    ///
    /// * `data_bytes` - Segment size; rounded down to a whole number of words.
    /// * `protected_below` - First byte address usable for data (0 disables the check).
    pub fn new(data_bytes: usize, protected_below: u32) -> Self {
        Self {
            words: vec![0; data_bytes / WORD_BYTES as usize],
            delta: BTreeMap::new(),
            protected_below,
        }
    }

    /// Capacity of the segment in words.
    pub const fn capacity_words(&self) -> usize {
        self.words.len()
    }

    /// Validates a computed address and converts it to a byte address.
    ///
    /// # Returns
    ///
    /// The address if it is word-aligned, inside the segment, and not inside
    /// the protected program region; otherwise `SimError::InvalidAddress`.
    pub fn check_address(&self, addr: i64) -> Result<u32, SimError> {
        let limit = self.words.len() as i64 * i64::from(WORD_BYTES);
        if addr % i64::from(WORD_BYTES) != 0
            || addr < i64::from(self.protected_below)
            || addr < 0
            || addr >= limit
        {
            return Err(SimError::InvalidAddress(addr));
        }
        Ok(addr as u32)
    }

    /// Reads the word at a validated byte address.
    pub fn read(&self, addr: u32) -> i32 {
        self.words[(addr / WORD_BYTES) as usize]
    }

    /// Writes the word at a validated byte address and logs it in the delta.
    pub fn write(&mut self, addr: u32, value: i32) {
        self.words[(addr / WORD_BYTES) as usize] = value;
        let _ = self.delta.insert(addr, value);
    }

    /// Stores made since the last call to [`DataMemory::clear_delta`], by address.
    pub const fn delta(&self) -> &BTreeMap<u32, i32> {
        &self.delta
    }

    /// Forgets the current cycle's stores.
    pub fn clear_delta(&mut self) {
        self.delta.clear();
    }

    /// Iterates over every non-zero word as `(byte address, value)`.
    pub fn non_zero(&self) -> impl Iterator<Item = (u32, i32)> + '_ {
        self.words
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w != 0)
            .map(|(i, &w)| (i as u32 * WORD_BYTES, w))
    }
}
