//! `greynoise noise` - IPs generated by internet scanners, search engines and worms.

use greynoise::{GreyNoiseApi, Value};

use super::{CommandError, Context};
use crate::cli::args::NoiseArgs;

pub async fn execute<A: GreyNoiseApi>(ctx: &Context<A>, args: NoiseArgs) -> Result<Vec<Value>, CommandError> {
    let noise = ctx.api.get_noise(args.date).await?;
    Ok(vec![noise])
}
