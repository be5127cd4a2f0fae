use offsetlib::errors::Result;
use offsetlib::scheduling::{
    get_calendar_by_name, Cal, CustomBusinessMonth, DateRoll, MonthAnchor, WeekMask,
};
use std::env;

fn usage() -> String {
    "usage: main <year> [week mask, e.g. 1111100 or \"Mon Tue Wed Thu Fri\"]".to_string()
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(year) = args.first().and_then(|y| y.parse::<i32>().ok()) else {
        eprintln!("{}", usage());
        std::process::exit(2);
    };
    let cal = match args.get(1) {
        Some(mask) => Cal::new(Vec::<chrono::NaiveDate>::new(), mask.parse::<WeekMask>()?),
        None => get_calendar_by_name("bus")?,
    };

    println!("{}", cal.print_year(year)?);

    let begin = CustomBusinessMonth::with_calendar(1, MonthAnchor::Begin, cal.clone());
    let end = CustomBusinessMonth::with_calendar(1, MonthAnchor::End, cal);
    println!("{:>7}  {:<10}  {:<10}", "", "begin", "end");
    for month in 1..=12 {
        println!(
            "{}-{:02}  {}  {}",
            year,
            month,
            begin.anchor_of_month(year, month)?,
            end.anchor_of_month(year, month)?
        );
    }
    Ok(())
}
