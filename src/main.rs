use wkm::presentation::cli::CliApp;

fn main() -> anyhow::Result<()> {
    // Logging is initialized by the app once the verbosity flag is known
    let app = CliApp::new();
    app.run()
}
