use clap::Parser;

fn main() {
    let args = order_uid::arguments::Arguments::parse();
    observe::tracing::initialize(&args.observe_config());
    tracing::info!("running order-uid with validated arguments:\n{}", args);
    if let Err(err) = order_uid::run(
        args.command,
        std::io::stdin().lock(),
        std::io::stdout().lock(),
    ) {
        tracing::error!(?err, "order-uid failed");
        std::process::exit(1);
    }
}
