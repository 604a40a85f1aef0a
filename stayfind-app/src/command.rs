use std::str::FromStr;

use chrono::NaiveDate;

/// One line of user input to the demo driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    DateFrom(NaiveDate),
    DateTo(NaiveDate),
    Adults(u32),
    Children(u32),
    Search,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let keyword = parts.next().ok_or("empty command")?;
        let arg = parts.next();

        let parse_date = |arg: Option<&str>| {
            arg.ok_or_else(|| "expected a date (YYYY-MM-DD)".to_string())
                .and_then(|a| {
                    NaiveDate::parse_from_str(a, "%Y-%m-%d").map_err(|e| e.to_string())
                })
        };
        let parse_count = |arg: Option<&str>| {
            arg.ok_or_else(|| "expected a number".to_string())
                .and_then(|a| a.parse::<u32>().map_err(|e| e.to_string()))
        };

        match keyword {
            "from" => Ok(Command::DateFrom(parse_date(arg)?)),
            "to" => Ok(Command::DateTo(parse_date(arg)?)),
            "adults" => Ok(Command::Adults(parse_count(arg)?)),
            "children" => Ok(Command::Children(parse_count(arg)?)),
            "search" => Ok(Command::Search),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("unknown command: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "from 2026-09-01".parse::<Command>().unwrap(),
            Command::DateFrom(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap())
        );
        assert_eq!("adults 2".parse::<Command>().unwrap(), Command::Adults(2));
        assert_eq!("search".parse::<Command>().unwrap(), Command::Search);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("from tomorrow".parse::<Command>().is_err());
        assert!("adults two".parse::<Command>().is_err());
        assert!("book".parse::<Command>().is_err());
    }
}
