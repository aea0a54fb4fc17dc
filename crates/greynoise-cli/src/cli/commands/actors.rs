//! `greynoise actors` - Profiles of known scanning actors.

use greynoise::{GreyNoiseApi, Value};

use super::{flatten, CommandError, Context};

pub async fn execute<A: GreyNoiseApi>(ctx: &Context<A>) -> Result<Vec<Value>, CommandError> {
    Ok(flatten(ctx.api.get_actors().await?))
}
