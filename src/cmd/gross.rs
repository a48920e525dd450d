//! Gross command - estimate the gross pay needed for a target take-home

use super::{format_gbp, print_result, EstimateArgs};
use crate::tax::estimate_gross_from_net;
use clap::Args;

#[derive(Args, Debug)]
pub struct GrossCommand {
    #[command(flatten)]
    args: EstimateArgs,
}

impl GrossCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        self.args.log_input_notes();
        let result = estimate_gross_from_net(&self.args.request())?;
        log::debug!(
            "gross search settled on {} annual for target net {} {}",
            format_gbp(result.annual.gross),
            format_gbp(self.args.amount),
            self.args.period
        );
        print_result("GROSS ESTIMATE", &result, self.args.json)
    }
}
