//! Security briefings

use securevault_guard::attacks;

use crate::display;

pub fn show() {
    display::section("Security Briefings");
    for attack in attacks() {
        display::attack(attack);
    }
    println!();
    display::info("Scan anything suspicious with `securevault scan link|message`");
}
