use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;
use temp_calc::domain::ports::RandomSource;
use temp_calc::{Session, TomlConfig};

struct Counter(i32);

impl RandomSource for Counter {
    fn next_in(&mut self, min: i32, max: i32) -> i32 {
        self.0 += 1;
        (min + self.0).min(max)
    }
}

fn load(content: &str) -> Result<TomlConfig> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(content.as_bytes())?;
    Ok(TomlConfig::from_file(temp_file.path())?)
}

/// 以 JSON 格式逐行輸出表單狀態
#[test]
fn test_json_session_with_config_file() -> Result<()> {
    let config = load(
        r#"
[display]
format = "json"

[random]
min_fahrenheit = 60
max_fahrenheit = 70
"#,
    )?;

    let mut session = Session::new(&config, Counter(0));
    let input = "preset random\nrandom\nc 100\nc 100.0\nshow\n";
    let mut output = Vec::new();
    session.run(input.as_bytes(), &mut output)?;

    let lines: Vec<serde_json::Value> = String::from_utf8(output)?
        .lines()
        .map(serde_json::from_str)
        .collect::<std::result::Result<_, _>>()?;

    // initial, two random presets, one celsius edit, show
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0]["fahrenheit"], 32.0);
    assert_eq!(lines[1]["fahrenheit"], 61.0);
    assert_eq!(lines[1]["condition"], "Pleasant");
    assert_eq!(lines[2]["fahrenheit"], 62.0);
    assert_eq!(lines[3]["fahrenheit"], 212.0);
    assert_eq!(lines[3]["kelvin"], 373.15);
    assert_eq!(lines[4], lines[3]);
    Ok(())
}

/// 自訂色階端點
#[test]
fn test_custom_color_scale() -> Result<()> {
    let config = load(
        r#"
[color]
cold_fahrenheit = 0.0
hot_fahrenheit = 60.0
"#,
    )?;

    let mut session = Session::new(&config, Counter(0));
    let mut output = Vec::new();
    session.run("f 30\n".as_bytes(), &mut output)?;

    let output = String::from_utf8(output)?;
    let last = output.lines().last().unwrap_or_default();
    assert!(last.ends_with("| Frozen | hsl(120,100%,50%)"), "{}", last);
    Ok(())
}

#[test]
fn test_help_and_bad_input_do_not_end_the_session() -> Result<()> {
    let config = TomlConfig::default();
    let mut session = Session::new(&config, Counter(0));
    let mut output = Vec::new();
    session.run("help\nf\nabsolute-zero\n".as_bytes(), &mut output)?;

    let output = String::from_utf8(output)?;
    assert!(output.contains("commands:"));
    assert!(output.contains("error: Unknown input 'f'"));
    assert!(output.lines().last().unwrap_or_default().contains("Absolute Zero"));
    Ok(())
}
