//! Session-wide achievements: fixed predicates over the ledger and the set
//! of visited bodies, unlocked at most once.

use std::collections::HashSet;

use crate::ledger::ResourceLedger;
use crate::structure::StructureType;

/// Which achievement a record refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Achievement {
    /// First building placed anywhere.
    FirstStep,
    /// Three unique bodies visited.
    PlanetHopper,
    /// Five buildings standing at once.
    SolarEmpire,
    /// 500 minerals banked.
    Industrialist,
    /// Two research labs deployed.
    Xenobiologist,
    /// All nine catalog bodies visited.
    MasterNavigator,
}

impl Achievement {
    pub const ALL: [Achievement; 6] = [
        Self::FirstStep,
        Self::PlanetHopper,
        Self::SolarEmpire,
        Self::Industrialist,
        Self::Xenobiologist,
        Self::MasterNavigator,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::FirstStep => "First Step",
            Self::PlanetHopper => "Planet Hopper",
            Self::SolarEmpire => "Solar Empire",
            Self::Industrialist => "Industrialist",
            Self::Xenobiologist => "Xenobiologist",
            Self::MasterNavigator => "Master Navigator",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::FirstStep => "Establish your first building in the solar system.",
            Self::PlanetHopper => "Visit at least 3 unique celestial bodies.",
            Self::SolarEmpire => "Maintain 5 active buildings across the system.",
            Self::Industrialist => "Reach a treasury of 500 credits.",
            Self::Xenobiologist => "Deploy 2 Research Labs.",
            Self::MasterNavigator => "Visit all 9 major celestial bodies.",
        }
    }

    fn satisfied(&self, ledger: &ResourceLedger, visited_planets: &HashSet<usize>) -> bool {
        match self {
            Self::FirstStep => !ledger.buildings().is_empty(),
            Self::PlanetHopper => visited_planets.len() >= 3,
            Self::SolarEmpire => ledger.buildings().len() >= 5,
            Self::Industrialist => ledger.minerals >= 500.0,
            Self::Xenobiologist => ledger.count_of(StructureType::Lab) >= 2,
            Self::MasterNavigator => visited_planets.len() >= 9,
        }
    }
}

/// Unlock bookkeeping for the whole achievement set.
#[derive(Debug, Clone, Default)]
pub struct AchievementState {
    unlocked: HashSet<Achievement>,
}

impl AchievementState {
    pub fn is_unlocked(&self, achievement: Achievement) -> bool {
        self.unlocked.contains(&achievement)
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    pub(crate) fn unlock(&mut self, achievement: Achievement) -> bool {
        self.unlocked.insert(achievement)
    }
}

/// Evaluate every locked achievement; returns those newly unlocked, in
/// catalog order. Already-unlocked achievements are skipped entirely, so a
/// predicate that later becomes false (e.g. minerals spent back below 500)
/// never re-locks or re-fires.
pub fn evaluate_achievements(
    state: &mut AchievementState,
    ledger: &ResourceLedger,
    visited_planets: &HashSet<usize>,
) -> Vec<Achievement> {
    let mut newly = Vec::new();
    for achievement in Achievement::ALL {
        if state.is_unlocked(achievement) {
            continue;
        }
        if achievement.satisfied(ledger, visited_planets) && state.unlock(achievement) {
            newly.push(achievement);
        }
    }
    newly
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn visited(n: usize) -> HashSet<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_first_step_unlocks_on_first_building() {
        let mut state = AchievementState::default();
        let mut ledger = ResourceLedger::new(100.0, 0.0, 0.0);
        assert!(evaluate_achievements(&mut state, &ledger, &visited(1)).is_empty());

        ledger
            .place(StructureType::Flag, Vec3::Y, 0, 0.0)
            .unwrap();
        let newly = evaluate_achievements(&mut state, &ledger, &visited(1));
        assert_eq!(newly, vec![Achievement::FirstStep]);
    }

    #[test]
    fn test_unlock_fires_once_and_never_relocks() {
        let mut state = AchievementState::default();
        let rich = ResourceLedger::new(600.0, 0.0, 0.0);
        assert_eq!(
            evaluate_achievements(&mut state, &rich, &visited(1)),
            vec![Achievement::Industrialist]
        );

        // Spending back below the threshold does not re-fire or re-lock.
        let poor = ResourceLedger::new(10.0, 0.0, 0.0);
        assert!(evaluate_achievements(&mut state, &poor, &visited(1)).is_empty());
        assert!(state.is_unlocked(Achievement::Industrialist));
    }

    #[test]
    fn test_navigator_requires_all_nine_bodies() {
        let mut state = AchievementState::default();
        let ledger = ResourceLedger::new(0.0, 0.0, 0.0);
        let newly = evaluate_achievements(&mut state, &ledger, &visited(9));
        assert!(newly.contains(&Achievement::PlanetHopper));
        assert!(newly.contains(&Achievement::MasterNavigator));
    }

    #[test]
    fn test_xenobiologist_counts_labs_only() {
        let mut state = AchievementState::default();
        let mut ledger = ResourceLedger::new(10_000.0, 0.0, 0.0);
        ledger.place(StructureType::Lab, Vec3::Y, 0, 0.0).unwrap();
        ledger.place(StructureType::Solar, Vec3::Y, 0, 0.0).unwrap();
        let newly = evaluate_achievements(&mut state, &ledger, &visited(0));
        assert!(!newly.contains(&Achievement::Xenobiologist));

        ledger.place(StructureType::Lab, Vec3::Y, 0, 0.0).unwrap();
        let newly = evaluate_achievements(&mut state, &ledger, &visited(0));
        assert!(newly.contains(&Achievement::Xenobiologist));
    }
}
