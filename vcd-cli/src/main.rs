#![cfg_attr(coverage, feature(coverage_attribute))]
mod cleanup;

use std::ffi::OsString;

use clap::{
    ArgAction,
    CommandFactory,
    Parser,
};
use tracing::*;
use vcd_core::errors::*;
use vcd_core::logging;
use vcd_core::prelude::*;

use crate::cleanup::Target;

#[derive(Clone, Debug, Parser)]
#[command(
    about = "delete the CAPVCD cluster RDE and vApp left behind by a Tanzu cluster on VMware Cloud Director",
    version
)]
struct Options {
    #[arg(long, long_help = "VMware Cloud Director URL", default_value = "")]
    url: String,

    #[arg(long, long_help = "VMware Cloud Director organisation name", default_value = "")]
    vorg: String,

    #[arg(long, long_help = "VMware Cloud Director virtual datacenter name", default_value = "")]
    vdc: String,

    #[arg(
        long,
        long_help = "VMware Cloud Director API token",
        env = VCD_API_TOKEN_ENV_VAR,
        hide_env_values = true,
        default_value = ""
    )]
    token: String,

    #[arg(long, long_help = "Tanzu cluster name", default_value = "")]
    name: String,

    // CAPVCD names the RDE and the vApp after the cluster, but nothing forces the two to
    // match, so either one can be overridden
    #[arg(long, long_help = "name of the CAPVCD cluster RDE to delete (defaults to --name)")]
    rde_name: Option<String>,

    #[arg(long, long_help = "name of the vApp to delete (defaults to --name)")]
    vapp_name: Option<String>,

    #[arg(long, long_help = "VMware Cloud Director API version to request", default_value = DEFAULT_API_VERSION)]
    api_version: String,

    #[arg(long, long_help = "skip TLS certificate verification")]
    insecure: bool,

    #[arg(
        long,
        long_help = "log every request to and response from the control plane",
        default_value_t = true,
        action = ArgAction::Set
    )]
    log_http: bool,

    #[arg(short, long, default_value = "info")]
    verbosity: String,
}

impl Options {
    fn target(&self) -> Target {
        Target {
            org: self.vorg.clone(),
            vdc: self.vdc.clone(),
            rde_name: self.rde_name.clone().unwrap_or_else(|| self.name.clone()),
            vapp_name: self.vapp_name.clone().unwrap_or_else(|| self.name.clone()),
        }
    }

    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            api_version: self.api_version.clone(),
            insecure: self.insecure,
            log_http: self.log_http,
            ..Default::default()
        }
    }
}

// Scripts written for the old tool pass long flags with a single dash (`-url x`, `-url=x`); clap
// would read those as a cluster of short flags, so they get rewritten to `--url` first.  Anything
// that isn't the name of a long flag is passed through untouched.
fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let long_flags: Vec<String> = Options::command()
        .get_arguments()
        .filter_map(|arg| arg.get_long())
        .map(String::from)
        .collect();

    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            let Some(flag) = arg.to_str().and_then(|a| a.strip_prefix('-')) else {
                return arg;
            };
            let name = flag.split_once('=').map_or(flag, |(name, _)| name);
            if name.len() > 1 && !name.starts_with('-') && long_flags.iter().any(|long| long == name) {
                OsString::from(format!("--{flag}"))
            } else {
                arg
            }
        })
        .collect()
}

async fn run(opts: &Options) -> EmptyResult {
    let client = VcdClient::connect(&opts.url, &opts.vorg, &opts.token, opts.session_config())
        .await
        .context("error initializing vCloud Director client")?;

    cleanup::cmd(&opts.target(), &client).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let opts = Options::parse_from(normalize_args(std::env::args_os()));
    logging::setup_for_cli(&opts.verbosity);
    if let Err(err) = run(&opts).await {
        vcderr!(err, "cleanup failed");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests;
