/// Display label for a feed editorial club name.
/// The feed abbreviates a few clubs awkwardly; override those here.
pub fn display_name(editorial_name: &str) -> &str {
    match editorial_name {
        "Real" => "R. Madrid",
        other => other,
    }
}
