use crate::model::RouteTableModel;
use crate::policy::EffectiveConfig;
use routeguard_types::Finding;

mod path_syntax;
mod utils;


pub use path_syntax::{classify, PathRule};

pub fn run_all(model: &RouteTableModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    path_syntax::run(model, cfg, out);
}
