use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use libschemadoc::render::DocumentAssembler;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        default_value = "api_doc/queries",
        help = "Directory holding one JSON record per query.",
        long,
    )]
    queries_dir: PathBuf,

    #[arg(
        default_value = "api_doc/types",
        help = "Directory holding one JSON record per named type.",
        long,
    )]
    types_dir: PathBuf,

    #[arg(
        default_value = "api_doc/index.html",
        help = "Path the self-contained HTML document is written to. The \
               parent directory is created if it does not exist.",
        long,
        short = 'o',
    )]
    output: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        log::debug!("Loading query records from {:#?}...", self.queries_dir);
        let queries = match libschemadoc::load_queries(&self.queries_dir) {
            Ok(queries) => queries,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to load query records: {e}",
                output_utils::RED_X,
            )),
        };
        log::debug!("Loaded {} queries.", queries.len());

        log::debug!("Loading type records from {:#?}...", self.types_dir);
        let types = match libschemadoc::load_types(&self.types_dir) {
            Ok(types) => types,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to load type records: {e}",
                output_utils::RED_X,
            )),
        };
        log::debug!("Loaded {} types.", types.len());

        log::debug!("Assembling document...");
        let html = DocumentAssembler::new(&queries, &types).assemble();

        if let Err(e) = libschemadoc::write_document(&self.output, &html) {
            return CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} Documentation generated: {}\n",
                "  * Loaded {} query records.\n",
                "  * Loaded {} type records.",
            ),
            output_utils::GREEN_CHECK,
            self.output.display(),
            queries.len(),
            types.len(),
        ))
    }
}
