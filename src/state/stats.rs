//! Dashboard Statistics
//!
//! In-memory operational counters refreshed on a fixed period. Nothing
//! here is persisted; the values are a loose simulation of live data.

use std::ops::Range;

/// Operational counters shown on the dashboard stat cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardStats {
    pub active_flights: u32,
    pub today_revenue: u64,
    pub available_aircraft: u32,
    pub total_aircraft: u32,
    pub active_employees: u32,
}

impl Default for DashboardStats {
    fn default() -> Self {
        Self {
            active_flights: 24,
            today_revenue: 45_230,
            available_aircraft: 18,
            total_aircraft: 20,
            active_employees: 156,
        }
    }
}

impl DashboardStats {
    /// Revenue display with a currency prefix and thousands separators,
    /// e.g. `"$45,230"`.
    pub fn revenue_display(&self) -> String {
        format!("${}", format_thousands(self.today_revenue))
    }

    /// Fleet availability display, e.g. `"18/20"`.
    pub fn aircraft_display(&self) -> String {
        format!("{}/{}", self.available_aircraft, self.total_aircraft)
    }
}

/// Source of uniform random integers, injected so ticks are deterministic
/// in tests.
pub trait Entropy {
    /// Uniform draw from a half-open range.
    fn draw(&mut self, range: Range<u32>) -> u32;
}

/// Browser entropy via `Math.random`.
#[derive(Clone, Copy, Default)]
pub struct JsEntropy;

impl Entropy for JsEntropy {
    fn draw(&mut self, range: Range<u32>) -> u32 {
        let span = f64::from(range.end - range.start);
        // Math.random() is in [0, 1), so the result stays below range.end.
        range.start + (js_sys::Math::random() * span) as u32
    }
}

/// Owns the stats record and its periodic mutation.
pub struct StatsController<E: Entropy> {
    stats: DashboardStats,
    entropy: E,
}

impl<E: Entropy> StatsController<E> {
    pub fn new(entropy: E) -> Self {
        Self {
            stats: DashboardStats::default(),
            entropy,
        }
    }

    pub fn stats(&self) -> DashboardStats {
        self.stats
    }

    /// One refresh step: flights and availability are redrawn, revenue only
    /// ever grows. Employee count and fleet size never change.
    pub fn tick(&mut self) -> DashboardStats {
        self.stats.active_flights = self.entropy.draw(20..30);
        self.stats.today_revenue += u64::from(self.entropy.draw(0..1000));
        self.stats.available_aircraft = self.entropy.draw(17..20);
        self.stats
    }
}

/// Insert comma thousands separators into a non-negative integer.
fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cheap deterministic generator (64-bit LCG, high bits taken).
    struct SeededEntropy(u64);

    impl Entropy for SeededEntropy {
        fn draw(&mut self, range: Range<u32>) -> u32 {
            self.0 = self
                .0
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let span = range.end - range.start;
            range.start + ((self.0 >> 33) as u32) % span
        }
    }

    #[test]
    fn seeded_baseline_values() {
        let stats = DashboardStats::default();
        assert_eq!(stats.active_flights, 24);
        assert_eq!(stats.today_revenue, 45_230);
        assert_eq!(stats.available_aircraft, 18);
        assert_eq!(stats.total_aircraft, 20);
        assert_eq!(stats.active_employees, 156);
    }

    #[test]
    fn tick_keeps_counters_in_range() {
        let mut controller = StatsController::new(SeededEntropy(7));

        for _ in 0..200 {
            let stats = controller.tick();
            assert!((20..30).contains(&stats.active_flights));
            assert!((17..20).contains(&stats.available_aircraft));
        }
    }

    #[test]
    fn revenue_is_monotonically_non_decreasing() {
        let mut controller = StatsController::new(SeededEntropy(42));
        let mut previous = controller.stats().today_revenue;

        for _ in 0..200 {
            let current = controller.tick().today_revenue;
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn tick_never_touches_fixed_counters() {
        let mut controller = StatsController::new(SeededEntropy(3));

        for _ in 0..50 {
            let stats = controller.tick();
            assert_eq!(stats.total_aircraft, 20);
            assert_eq!(stats.active_employees, 156);
        }
    }

    #[test]
    fn thousands_separator_formatting() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(45_230), "45,230");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn display_strings_reflect_in_memory_values() {
        let mut controller = StatsController::new(SeededEntropy(11));
        let stats = controller.tick();

        assert_eq!(
            stats.revenue_display(),
            format!("${}", format_thousands(stats.today_revenue))
        );
        assert_eq!(
            stats.aircraft_display(),
            format!("{}/{}", stats.available_aircraft, stats.total_aircraft)
        );

        let baseline = DashboardStats::default();
        assert_eq!(baseline.revenue_display(), "$45,230");
        assert_eq!(baseline.aircraft_display(), "18/20");
    }
}
