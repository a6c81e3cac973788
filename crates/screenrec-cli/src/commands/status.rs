use anyhow::Result;
use screenrec_core::Settings;

pub fn run() -> Result<()> {
    let settings = Settings::load();

    match Settings::path() {
        Some(path) if path.exists() => println!("Settings file: {}", path.display()),
        Some(path) => println!("Settings file: {} (not created yet)", path.display()),
        None => println!("Settings file: unavailable on this system"),
    }
    println!();
    println!("Platform:       {}", settings.platform);
    match settings.library.resolved_dir() {
        Some(dir) => println!("Library:        {}", dir.display()),
        None => println!("Library:        (none)"),
    }
    println!("Video types:    {}", settings.library.extensions.join(", "));
    println!(
        "Capture path:   {}",
        settings.capture.resolved_output_path().display()
    );
    println!("Playback:       {}s", settings.ui.play_secs);
    println!(
        "Keyboard bar:   {}",
        if settings.keyboard_bar() { "on" } else { "off" }
    );
    Ok(())
}
