//! Concrete housing source configurations.
//!
//! Each module configures one of the strategy engines for a specific site;
//! the genuinely variable parts (index paths, link matchers, probe
//! selectors) live here, the crawl algorithm does not.

pub mod buildings;
pub mod cornell_offcampus;
pub mod demos_johnny;
pub mod ithaca_renting;
pub mod lambrou;
pub mod travis_hyde;
pub mod urban_ithaca;
