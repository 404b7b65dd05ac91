use chrono::Utc;
use selene::{MoonPhase, PhaseEngine, DEFAULT_HORIZON_DAYS};

fn main() {
    let engine = PhaseEngine::default();
    let now = Utc::now().naive_utc();

    let current = engine.phase_at(now);
    println!("{current}");

    for phase in [MoonPhase::NewMoon, MoonPhase::FullMoon] {
        match engine.next_phase(now, phase, DEFAULT_HORIZON_DAYS) {
            Some(found) => println!("next {phase}: {}", found.date),
            None => println!("no {phase} in the next {DEFAULT_HORIZON_DAYS} days"),
        }
    }
}
