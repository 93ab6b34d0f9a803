mod extract;
mod whoami;

pub use extract::*;
pub use whoami::*;

pub async fn health() -> &'static str {
    "ok"
}
