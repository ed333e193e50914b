//! Conditional bootstrap walkthrough
//!
//! Run with: cargo run --example conditional_bootstrap

use gantry_core::{Environment, Value};
use gantry_runtime::{parse_manifest, Bootstrap};

const MANIFEST: &str = r#"
blueprints:
  - id: web
    when:
      all:
        - property: server.enabled
          value: true
    beans:
      - name: http_server
        provider: web::HttpServer
      - name: fallback_logger
        provider: log::StdoutLogger
        when:
          phase: register_bean
          not:
            - property: logging.custom
              op: exists
  - id: cache
    beans:
      - name: lru_cache
        provider: cache::Lru
"#;

fn main() -> anyhow::Result<()> {
    let blueprints = parse_manifest(MANIFEST)?;

    let environment = Environment::new()
        .with_property("server.enabled".to_string(), Value::Bool(true))
        .with_property("logging.custom".to_string(), Value::String("json".to_string()));

    let outcome = Bootstrap::new(environment).run(&blueprints)?;

    println!("Registered beans:");
    for bean in outcome.registry.iter() {
        println!("  {} ({})", bean.name, bean.provider);
    }

    println!("Excluded:");
    for skipped in &outcome.report.skipped {
        match &skipped.bean {
            Some(bean) => println!("  bean '{}' of '{}' in {}", bean, skipped.blueprint, skipped.phase),
            None => println!("  blueprint '{}' in {}", skipped.blueprint, skipped.phase),
        }
    }

    Ok(())
}
