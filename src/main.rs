use std::env;

use festivos::catalog::jsoncatalog::JsonCatalog;
use festivos::holiday::holidayservice::{HolidayService, query_date};

const CATALOG_PATH: &str = "data/festivos.json";

fn main() {
    let catalog = JsonCatalog::from_reader(CATALOG_PATH).unwrap();
    let service = HolidayService::new(catalog);

    let args: Vec<i32> = env::args()
        .skip(1)
        .map(|arg| arg.parse().unwrap())
        .collect();
    match args.as_slice() {
        [year] => {
            for holiday in service.holidays_in_year(*year).unwrap() {
                println!("{}, {}", holiday.date(), holiday.name());
            }
        }
        [year, month, day] => {
            let date = query_date(*year, *month as u32, *day as u32).unwrap();
            println!("{}, {}", date, service.is_holiday(date).unwrap());
        }
        _ => {
            eprintln!("usage: festivos <year> | festivos <year> <month> <day>");
        }
    }
}
