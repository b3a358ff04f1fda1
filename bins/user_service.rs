use service::User;

const SERVICE: &str = "user-service";
const DEFAULT_PORT: u16 = 8080;

fn main() -> std::process::ExitCode {
    server::bootstrap::launch::<User>(SERVICE, DEFAULT_PORT)
}
