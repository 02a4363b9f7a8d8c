//! Value objects - immutable objects defined by their attributes

mod abilities;
mod combat;
mod impact_dice;
mod settings;
mod severity;

pub use abilities::{Ability, AbilityScore, AbilitySet};
pub use combat::{Aim, Aspect, DefenseType, SkillCategory, SuccessLevel};
pub use impact_dice::ImpactDice;
pub use settings::{GameClock, InjuryRecording, RuleOptions};
pub use severity::{Severity, SeverityClass, SeverityTable};
