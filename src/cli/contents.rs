//! `aion-timer contents` - list tracked contents and their options

use aion_timer_core::{CONTENT_LIST, QUICK_ADVANCE_NOTICES};
use anyhow::Result;

pub fn run() -> Result<()> {
    for def in CONTENT_LIST {
        println!("{} ({})", def.name, def.id);
        println!("  {}", def.description);
        print!("  options:");
        for choice in def.choices {
            print!("  {} ({})", choice.value, choice.label);
        }
        println!();
        println!();
    }

    let quick: Vec<String> = QUICK_ADVANCE_NOTICES.iter().map(u32::to_string).collect();
    println!("Quick advance-notice picks (minutes): {}", quick.join(", "));
    Ok(())
}
