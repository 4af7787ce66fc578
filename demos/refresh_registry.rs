use bankdaten::registry::*;

fn main() {
    let cache_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/blz_registry.csv".into());

    let config = RegistryConfigBuilder::new().cache_path(&cache_path).build();
    let feed = HttpFeed::from_config(&config);

    println!("=== BLZ Registry ===\n");
    match load_registry(&config, &feed) {
        Ok(registry) => {
            println!("  {} banks available (cache: {cache_path})", registry.len());
            for blz in ["10010010", "37040044", "50010517"] {
                println!(
                    "  {blz} => {} / {} / {}",
                    registry.bank_name(blz).unwrap_or("-"),
                    registry.city(blz).unwrap_or("-"),
                    registry.bic(blz).unwrap_or("-"),
                );
            }
        }
        Err(e) => {
            eprintln!("  registry unavailable: {e}");
            std::process::exit(1);
        }
    }
}
