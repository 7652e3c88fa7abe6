use {
    std::{
        env, fs,
        io::{self, Read},
        process::ExitCode,
    },
    terra_facade::{Error, FacadeConfig, OperationError, Result, TxOutput},
    terra_tx_parser::BroadcastResult,
};

/// Reads the broadcast result JSON from `path`, or from stdin when no path is given.
fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| Error::Io {
            source_name: path.to_string(),
            source,
        }),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| Error::Io {
                    source_name: "stdin".to_string(),
                    source,
                })?;
            Ok(buf)
        }
    }
}

fn format_broadcast(config: &FacadeConfig, json: &str) -> Result<TxOutput> {
    let result = BroadcastResult::from_json(json)?;
    Ok(TxOutput::new(&result, &config.context)?)
}

pub fn main() -> ExitCode {
    dotenv::dotenv().ok();
    env_logger::init();

    // Example: FACADE_TX_TYPE=sendAUST FACADE_TAX_FEE=0.0035 FACADE_REQUESTED_AMOUNT=10
    let config = FacadeConfig::from_env();
    let ctx = &config.context;

    log::info!(
        "Formatting {} broadcast on {}/{}: tax_fee={}, gas_price={}, requested_amount={}",
        ctx.tx_type,
        ctx.chain,
        ctx.network,
        ctx.tax_fee,
        ctx.gas_price,
        ctx.requested_amount.as_deref().unwrap_or("-")
    );

    let path = env::args().nth(1);
    match read_input(path.as_deref()).and_then(|json| format_broadcast(&config, &json)) {
        Ok(output) => {
            println!("{}", output.format(config.output_format));
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to format broadcast result: {e}");
            println!("{}", OperationError::new(ctx.tx_type, &ctx.chain, e).to_json());
            ExitCode::FAILURE
        }
    }
}
