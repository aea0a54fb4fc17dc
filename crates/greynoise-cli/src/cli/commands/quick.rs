//! `greynoise quick_check` / `greynoise multi_quick_check` - Is this IP internet background noise?

use greynoise::{GreyNoiseApi, Value};

use super::{flatten, CommandError, Context};
use crate::cli::args::IpArgs;

/// A single address uses the quick endpoint; several go out as one bulk request.
pub async fn execute<A: GreyNoiseApi>(ctx: &Context<A>, args: IpArgs) -> Result<Vec<Value>, CommandError> {
    let ips = ctx.ip_addresses(args.ip_addresses)?;

    match ips.as_slice() {
        [] => Ok(Vec::new()),
        [ip] => Ok(vec![ctx.api.get_noise_status(ip).await?]),
        _ => Ok(flatten(ctx.api.get_noise_status_bulk(&ips).await?)),
    }
}

/// Every address goes out in one bulk request; a failure fails the whole batch.
pub async fn execute_multi<A: GreyNoiseApi>(
    ctx: &Context<A>,
    args: IpArgs,
) -> Result<Vec<Value>, CommandError> {
    let ips = ctx.ip_addresses(args.ip_addresses)?;
    if ips.is_empty() {
        return Ok(Vec::new());
    }

    Ok(flatten(ctx.api.get_noise_status_bulk(&ips).await?))
}
