use miette::Result;

/// Main entry point for the service-orbit CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler for readable error reporting
    miette::set_panic_hook();

    service_orbit::logging::init();

    service_orbit::run()
}
