//! bounty-readme library: dataset building and README character picking.

pub mod bounty;
pub mod config;
pub mod data;
pub mod dataset;
pub mod images;
pub mod lookup;
pub mod model;
pub mod names;
pub mod picker;
pub mod ranking;
pub mod template;
