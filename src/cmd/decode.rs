use crate::reports;
use clap::Args;
use lapboard::timecode;

#[derive(Args, Debug, Clone)]
pub struct DecodeArgs {
    /// Time strings, e.g. 1'23'45
    #[arg(required = true, allow_hyphen_values = true)]
    pub times: Vec<String>,
}

pub fn run(args: &DecodeArgs) {
    let decoded: Vec<_> = args
        .times
        .iter()
        .map(|t| (t.clone(), timecode::decode(t)))
        .collect();
    reports::print_decode_table(&decoded);
}
