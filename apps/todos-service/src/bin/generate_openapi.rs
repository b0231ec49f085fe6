//! # OpenAPI YAML 生成ツール
//!
//! Rust の型から OpenAPI 仕様を YAML 形式で標準出力に出力する。
//!
//! ```bash
//! cargo run --bin generate-openapi -p todos-service > openapi.yaml
//! ```

use todos_service::openapi::ApiDoc;
use utoipa::OpenApi;

fn main() -> anyhow::Result<()> {
   let yaml = ApiDoc::openapi().to_yaml()?;
   print!("{yaml}");
   Ok(())
}
