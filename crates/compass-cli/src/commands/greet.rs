use compass_core::greeting::{daily_affirmation, greeting, ABOUT};
use compass_core::Config;

pub fn greet(name: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let name = name
        .or_else(|| std::env::var("COMPASS_USER").ok())
        .unwrap_or_default();
    println!("{}", greeting(&name));

    if Config::load_or_default().display.show_affirmation {
        let today = chrono::Local::now().date_naive();
        println!("Affirmation of the day: {}", daily_affirmation(today));
    }
    Ok(())
}

pub fn about() -> Result<(), Box<dyn std::error::Error>> {
    print!("{ABOUT}");
    Ok(())
}
