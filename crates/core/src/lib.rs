//! Liturgical calendar date engine.
//!
//! Given a year, derives Easter and every date that follows from it, tiles
//! the liturgical year into its six seasons, assigns the A/B/C lectionary
//! cycle and numbers the Sundays of Ordinary Time with Proper numbers.
//!
//! Everything here is a pure function of its inputs. Nothing performs I/O
//! and every value is immutable once returned.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use lectio_core::calendar::{generate_liturgical_year, AdventYear, SeasonName};
//!
//! let year = generate_liturgical_year(AdventYear::new(2024).unwrap()).unwrap();
//! let date = NaiveDate::from_ymd_opt(2025, 7, 6).unwrap();
//!
//! assert_eq!(year.season_for(date).unwrap().name, SeasonName::OrdinaryTime);
//! assert_eq!(year.proper_for(date).unwrap(), Some(4));
//! ```

pub mod cache;
pub mod calendar;
pub mod storage;
