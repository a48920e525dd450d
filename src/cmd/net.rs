//! Net command - estimate take-home pay from gross pay

use super::{print_result, EstimateArgs};
use crate::tax::estimate_take_home;
use clap::Args;

#[derive(Args, Debug)]
pub struct NetCommand {
    #[command(flatten)]
    args: EstimateArgs,
}

impl NetCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        self.args.log_input_notes();
        let result = estimate_take_home(&self.args.request());
        print_result("TAKE-HOME ESTIMATE", &result, self.args.json)
    }
}
