//! Simulation report generation.

use crate::combat::CombatResult;
use serde::Serialize;

/// Outcome of one simulated encounter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStats {
    pub result: Option<CombatResult>,
    pub timed_out: bool,
    pub turns: u32,
    pub essence: u64,
    pub experience: u64,
    pub items: u64,
    pub final_health: u32,
    pub max_health: u32,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub victories: u32,
    pub defeats: u32,
    pub fled: u32,
    pub timed_out: u32,

    pub avg_turns: f64,
    pub avg_final_health_pct: f64,
    pub total_essence: u64,
    pub total_experience: u64,
    pub total_items: u64,

    // Individual run stats for detailed analysis
    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let count = |result: CombatResult| {
            runs.iter().filter(|r| r.result == Some(result)).count() as u32
        };
        let victories = count(CombatResult::Victory);
        let defeats = count(CombatResult::Defeat);
        let fled = count(CombatResult::Fled);
        let timed_out = runs.iter().filter(|r| r.timed_out).count() as u32;

        let divisor = num_runs.max(1) as f64;
        let avg_turns = runs.iter().map(|r| r.turns as f64).sum::<f64>() / divisor;
        let avg_final_health_pct = runs
            .iter()
            .map(|r| r.final_health as f64 / r.max_health.max(1) as f64 * 100.0)
            .sum::<f64>()
            / divisor;

        Self {
            num_runs,
            victories,
            defeats,
            fled,
            timed_out,
            avg_turns,
            avg_final_health_pct,
            total_essence: runs.iter().map(|r| r.essence).sum(),
            total_experience: runs.iter().map(|r| r.experience).sum(),
            total_items: runs.iter().map(|r| r.items).sum(),
            run_stats: runs,
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.num_runs == 0 {
            return 0.0;
        }
        self.victories as f64 / self.num_runs as f64 * 100.0
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                 ENCOUNTER SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} timed out\n\n",
            self.num_runs, self.timed_out
        ));

        report.push_str("── OUTCOMES ─────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Victories:        {}\n", self.victories));
        report.push_str(&format!("  Defeats:          {}\n", self.defeats));
        report.push_str(&format!("  Fled:             {}\n", self.fled));
        report.push_str(&format!("  Win Rate:         {:.1}%\n\n", self.win_rate()));

        report.push_str("── PACING ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Turns:        {:.1}\n", self.avg_turns));
        report.push_str(&format!(
            "  Avg Health Left:  {:.1}%\n\n",
            self.avg_final_health_pct
        ));

        report.push_str("── REWARDS ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Total Essence:    {}\n", self.total_essence));
        report.push_str(&format!("  Total Experience: {}\n", self.total_experience));
        report.push_str(&format!("  Total Items:      {}\n\n", self.total_items));

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let rating = if self.win_rate() > 95.0 {
            "TOO EASY - Players almost never lose"
        } else if self.win_rate() > 70.0 {
            "GOOD - Challenging but fair"
        } else if self.win_rate() > 40.0 {
            "HARD - Frequent defeats"
        } else {
            "TOO HARD - Most encounters are lost"
        };
        report.push_str(&format!("  Rating:           {}\n", rating));
        if self.timed_out > 0 {
            report.push_str("  ⚠️  Some encounters hit the action limit - enemies too tanky?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(result: CombatResult, turns: u32, essence: u64) -> RunStats {
        RunStats {
            result: Some(result),
            timed_out: false,
            turns,
            essence,
            experience: essence * 2,
            items: 0,
            final_health: 25,
            max_health: 50,
        }
    }

    #[test]
    fn test_report_generation() {
        let runs = vec![
            run(CombatResult::Victory, 6, 10),
            run(CombatResult::Defeat, 4, 0),
        ];

        let report = SimReport::from_runs(runs);
        assert_eq!(report.num_runs, 2);
        assert_eq!(report.victories, 1);
        assert_eq!(report.defeats, 1);
        assert!((report.avg_turns - 5.0).abs() < 1e-9);
        assert!((report.avg_final_health_pct - 50.0).abs() < 1e-9);
        assert_eq!(report.total_experience, 20);
        assert!((report.win_rate() - 50.0).abs() < 1e-9);
        assert!(report.to_text().contains("Victories:        1"));
    }

    #[test]
    fn test_json_report_skips_runs() {
        let report = SimReport::from_runs(vec![run(CombatResult::Fled, 2, 0)]);
        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(json["fled"], 1);
        assert!(json.get("run_stats").is_none());
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(Vec::new());
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.win_rate(), 0.0);
        assert_eq!(report.avg_turns, 0.0);
    }
}
