//! Centralized icon definitions.
//!
//! Maps semantic icon names to Bootstrap Icons, so swapping an icon is a
//! one-line change here.

use icondata::Icon;

pub const CHEVRON_LEFT: Icon = icondata::BsChevronLeft;
pub const CHEVRON_RIGHT: Icon = icondata::BsChevronRight;
pub const CALENDAR: Icon = icondata::BsCalendar3;
pub const SEARCH: Icon = icondata::BsSearch;
pub const CLOSE: Icon = icondata::BsXLg;
pub const EXTERNAL_LINK: Icon = icondata::BsBoxArrowUpRight;
pub const LANGUAGE: Icon = icondata::BsTranslate;
pub const SUN: Icon = icondata::BsSunFill;
pub const MOON: Icon = icondata::BsMoonFill;
pub const RETRY: Icon = icondata::BsArrowClockwise;
