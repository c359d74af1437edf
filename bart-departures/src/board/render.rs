//! Console rendering of the departure board.
//!
//! Both writers take any `io::Write` so the exact output can be checked
//! in tests.

use std::io::{self, Write};

use crate::domain::{Departure, ResponseSnapshot};

/// Line printed above and below the header.
pub const SEPARATOR: &str = "-----------------------------------------------";

/// Printed instead of rows when the board is empty.
pub const NO_TRAINS: &str = "No trains running at this time!";

/// Write the banner: separator, `<station> - <time> - <date>`, separator.
pub fn write_header<W: Write>(snapshot: &ResponseSnapshot, out: &mut W) -> io::Result<()> {
    writeln!(out, "{SEPARATOR}")?;
    writeln!(
        out,
        "{} - {} - {}",
        snapshot.station_name, snapshot.time, snapshot.date
    )?;
    writeln!(out, "{SEPARATOR}")
}

/// Write up to `count` departures.
///
/// An empty list prints only [`NO_TRAINS`]. A list shorter than `count`
/// prints a shortage notice followed by every departure.
pub fn write_departures<W: Write>(
    departures: &[Departure],
    count: usize,
    out: &mut W,
) -> io::Result<()> {
    if departures.is_empty() {
        return writeln!(out, "{NO_TRAINS}");
    }

    if departures.len() < count {
        writeln!(out, "{}", shortage_notice(count))?;
    }

    for departure in departures.iter().take(count) {
        writeln!(out, "{}", format_row(departure))?;
    }

    Ok(())
}

/// Notice printed when fewer than `count` departures are available.
pub fn shortage_notice(count: usize) -> String {
    format!("We don't have enough data for {count} but here's what we do have:")
}

/// One board row: minutes right-aligned to two columns, " min", tab, destination.
pub fn format_row(departure: &Departure) -> String {
    format!("{:>2} min\t{}", departure.minutes, departure.destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Minutes;

    fn dep(m: u32, dest: &str) -> Departure {
        Departure::new(Minutes::new(m), dest)
    }

    fn render(departures: &[Departure], count: usize) -> String {
        let mut out = Vec::new();
        write_departures(departures, count, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn header_layout() {
        let snapshot = ResponseSnapshot {
            date: "05/09/2024".into(),
            time: "04:24:03 PM PDT".into(),
            station_name: "Montgomery St.".into(),
            groups: Vec::new(),
        };

        let mut out = Vec::new();
        write_header(&snapshot, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{SEPARATOR}\nMontgomery St. - 04:24:03 PM PDT - 05/09/2024\n{SEPARATOR}\n")
        );
        assert_eq!(SEPARATOR.len(), 47);
    }

    #[test]
    fn header_prints_date_as_sent() {
        let snapshot = ResponseSnapshot {
            date: "5/9/2024".into(),
            time: "4:24 PM".into(),
            station_name: "24th St. Mission".into(),
            groups: Vec::new(),
        };

        let mut out = Vec::new();
        write_header(&snapshot, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.lines().nth(1), Some("24th St. Mission - 4:24 PM - 5/9/2024"));
    }

    #[test]
    fn row_format() {
        assert_eq!(format_row(&dep(0, "Dublin/Pleasanton")), " 0 min\tDublin/Pleasanton");
        assert_eq!(format_row(&dep(4, "Daly City")), " 4 min\tDaly City");
        assert_eq!(format_row(&dep(15, "Richmond")), "15 min\tRichmond");
        assert_eq!(format_row(&dep(120, "Antioch")), "120 min\tAntioch");
    }

    #[test]
    fn empty_prints_only_notice() {
        assert_eq!(render(&[], 10), format!("{NO_TRAINS}\n"));
    }

    #[test]
    fn short_list_prints_notice_then_all_rows() {
        let departures = vec![dep(0, "Dublin/Pleasanton"), dep(4, "Daly City"), dep(9, "Pleasant Hill")];

        assert_eq!(
            render(&departures, 10),
            "We don't have enough data for 10 but here's what we do have:\n\
             \x200 min\tDublin/Pleasanton\n\
             \x204 min\tDaly City\n\
             \x209 min\tPleasant Hill\n"
        );
    }

    #[test]
    fn long_list_prints_first_count_rows() {
        let departures: Vec<Departure> = (0..12).map(|i| dep(i * 3, &format!("Dest {i}"))).collect();

        let output = render(&departures, 10);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 10);
        for (i, line) in lines.iter().enumerate() {
            assert_eq!(*line, format_row(&departures[i]));
        }
        assert!(!output.contains("Dest 10"));
        assert!(!output.contains("enough data"));
    }

    #[test]
    fn exact_count_prints_without_notice() {
        let departures: Vec<Departure> = (0..10).map(|i| dep(i, "Antioch")).collect();

        let output = render(&departures, 10);
        assert_eq!(output.lines().count(), 10);
        assert!(!output.contains("enough data"));
    }
}
