use packmap::{Key, Package};

/// Shows positional and named keys living in one container
fn main() {
    // Route arguments: positional segments plus named query parameters
    let mut args = Package::from_values(["orders", "1042"]);
    args.pack("format", "json");
    args.pack("page", "2");

    println!("ROUTE ARGUMENTS:");
    for (key, value) in &args {
        println!("  {} => {}", key, value);
    }

    // Positional appends continue past every integer key used so far
    args.pack(10, "sparse");
    let assigned = args.pack_value("appended");
    println!("\nAppended under key {}", assigned);

    // Integer 1 and string "1" address different entries
    args.pack("1", "named one");
    println!(
        "key 1 -> {:?}, key \"1\" -> {:?}",
        args.item(1),
        args.item("1")
    );

    // Consuming reads with a default
    println!("\nformat = {}", args.unpack_or("format", "html"));
    println!("format again = {}", args.unpack_or("format", "html"));

    let remaining: Vec<Key> = args.iter().map(|(key, _)| key.clone()).collect();
    println!("remaining keys: {:?}", remaining);
}
