use anyhow::Result;

use crate::cli::{Cli, Command};
use crate::plan::{self, BasePolicy, ScaffoldPlan};
use crate::scaffold;

pub fn run(cli: Cli) -> Result<()> {
    let dry_run = cli.dry_run;
    match cli.command {
        Command::Devops(args) => run_plan(&plan::devops(&args.base), dry_run),
        Command::Aws(args) => run_plan(&plan::aws(&args.base), dry_run),
        Command::All(args) => {
            run_plan(&plan::devops(&args.base), dry_run)?;
            let mut aws = plan::aws(&args.base);
            if dry_run {
                // The devops half would have created `<base>/AWS` (AWS is one
                // of its topics), so the chained preview must not fail the
                // pre-flight on a hub that only exists in simulation.
                aws.base_policy = BasePolicy::CreateIfMissing;
            }
            run_plan(&aws, dry_run)
        }
    }
}

fn run_plan(plan: &ScaffoldPlan, dry_run: bool) -> Result<()> {
    let summary = scaffold::ensure_structure(plan, dry_run)?;
    if dry_run {
        println!("[dry-run] plan `{}` against '{}':", plan.name, plan.base);
    } else {
        println!("Plan `{}` completed in '{}':", plan.name, plan.base);
    }
    print!("{}", summary.render());
    Ok(())
}
