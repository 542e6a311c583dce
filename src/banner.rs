// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    // Using a raw string literal for the multi-line banner
    let banner = r#"
 _    _                        ____             _   _
| | _| |__  _ __ ___   ___ _ _/ ___|  ___ _ __ | |_(_)
| |/ / '_ \| '_ ` _ \ / _ \ '__\___ \ / _ \ '_ \| __| |
|   <| | | | | | | | |  __/ |   ___) |  __/ | | | |_| |
|_|\_\_| |_|_| |_| |_|\___|_|  |____/ \___|_| |_|\__|_|

    Khmer Sentiment Analysis
"#;
    println!("{}", banner);
}
