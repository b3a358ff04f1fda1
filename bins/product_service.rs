use service::Product;

const SERVICE: &str = "product-service";
const DEFAULT_PORT: u16 = 8081;

fn main() -> std::process::ExitCode {
    server::bootstrap::launch::<Product>(SERVICE, DEFAULT_PORT)
}
