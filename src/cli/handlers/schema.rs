use crate::graphql::schema_sdl;
use anyhow::Result;

pub fn handle_schema() -> Result<()> {
    print!("{}", schema_sdl());
    Ok(())
}
