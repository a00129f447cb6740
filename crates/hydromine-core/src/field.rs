//! The hydro field: a fixed set of capacity-bounded roids.
//!
//! Owns the mutable per-roid state for one sector: remaining hydro,
//! per-roid collected counters, and how many slots genesis has unlocked.
//! The field is a plain value: `Clone` produces a fully independent
//! snapshot, which is how the strategy freezes its delay-search checkpoint
//! (no shared storage between checkpoint and live state).

use crate::fixed::{Fixed64, f64_to_fixed64};
use crate::rng::SimRng;
use crate::tables::{GENESIS_ROIDS, MAX_ROIDS, ROID_HYDRO_CAP, START_ROIDS};

/// One roid's visible state: label, remaining hydro, hydro collected since
/// the last genrich.
#[derive(Debug, Clone, PartialEq)]
pub struct RoidRecord {
    pub label: String,
    pub remaining: Fixed64,
    pub collected: Fixed64,
}

/// A hydro sector's roid field.
#[derive(Debug, Clone, PartialEq)]
pub struct HydroField {
    /// Remaining hydro per slot. Slots beyond the genesis counter are zero.
    roids: [Fixed64; MAX_ROIDS],
    /// Hydro drained per slot since the last genrich.
    collected: [Fixed64; MAX_ROIDS],
    /// Slots unlocked by genesis so far, beyond the starting eight.
    gen_counter: usize,
}

impl HydroField {
    /// Populate a fresh field holding exactly `total_hydro`.
    ///
    /// The first seven slots draw independently from
    /// `[0.9 × avg, 1.1 × avg]` (avg = total ÷ 8), rounded to the nearest
    /// integer; the eighth absorbs the remainder so the sum is exact.
    pub fn new(total_hydro: u32, rng: &mut SimRng) -> Self {
        let mut roids = [Fixed64::ZERO; MAX_ROIDS];
        let avg = Fixed64::from_num(total_hydro) / Fixed64::from_num(START_ROIDS as u32);
        let lo = avg * f64_to_fixed64(0.9);
        let hi = avg * f64_to_fixed64(1.1);
        let mut drawn = Fixed64::ZERO;
        for roid in roids.iter_mut().take(START_ROIDS - 1) {
            *roid = rng.uniform(lo, hi).round();
            drawn += *roid;
        }
        roids[START_ROIDS - 1] = Fixed64::from_num(total_hydro) - drawn;
        Self {
            roids,
            collected: [Fixed64::ZERO; MAX_ROIDS],
            gen_counter: 0,
        }
    }

    /// One genrich event: genesis then enrichment, in that order, so roids
    /// unlocked this event are enriched by it too.
    ///
    /// Genesis fills up to [`GENESIS_ROIDS`] still-locked slots with
    /// `yield_amount ÷ 4` each. Enrichment multiplies every roid, floors to
    /// an integer, clamps at the roid cap, and resets the collected
    /// counters.
    pub fn genrich(&mut self, yield_amount: u32, multiplier: Fixed64) {
        let per_roid = Fixed64::from_num(yield_amount / GENESIS_ROIDS as u32);
        let unlocked = START_ROIDS + self.gen_counter;
        if unlocked < MAX_ROIDS {
            let fresh = GENESIS_ROIDS.min(MAX_ROIDS - unlocked);
            for roid in &mut self.roids[unlocked..unlocked + fresh] {
                *roid = per_roid;
            }
            self.gen_counter += fresh;
        }

        let cap = Fixed64::from_num(ROID_HYDRO_CAP);
        for roid in &mut self.roids {
            *roid = (*roid * multiplier).floor().min(cap);
        }
        self.collected = [Fixed64::ZERO; MAX_ROIDS];
    }

    /// All slot indices ordered by descending remaining hydro. Ties keep
    /// their original slot order (stable sort), which is what fixes the
    /// mining priority.
    pub fn sort_targets(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..MAX_ROIDS).collect();
        order.sort_by(|&a, &b| self.roids[b].cmp(&self.roids[a]));
        order
    }

    /// Drain `total` evenly across `targets`, moving what each roid can
    /// give into its collected counter. A roid never goes below zero; a
    /// short roid simply yields less. No-op for an empty target set or a
    /// non-positive amount.
    pub fn collect(&mut self, total: Fixed64, targets: &[usize]) {
        if targets.is_empty() || total <= Fixed64::ZERO {
            return;
        }
        let share = total / Fixed64::from_num(targets.len() as u32);
        for &idx in targets {
            let moved = self.roids[idx].min(share);
            self.collected[idx] += moved;
            self.roids[idx] -= moved;
        }
    }

    /// Hydro remaining across the whole field.
    pub fn total_hydro(&self) -> Fixed64 {
        self.roids.iter().copied().sum()
    }

    /// Per-slot view for logging: label `r00`..`r13`, remaining, collected.
    pub fn state(&self) -> Vec<RoidRecord> {
        (0..MAX_ROIDS)
            .map(|i| RoidRecord {
                label: format!("r{i:02}"),
                remaining: self.roids[i],
                collected: self.collected[i],
            })
            .collect()
    }

    /// True once genesis has unlocked every slot and some roid sits at
    /// exactly zero. Mining past this point would stall, so the strategy
    /// treats it as "the current delay is too short".
    pub fn is_drained(&self) -> bool {
        self.gen_counter == MAX_ROIDS - START_ROIDS
            && self.roids.iter().any(|roid| *roid == Fixed64::ZERO)
    }
}
