use vcd_core::errors::*;
use vcd_core::prelude::*;

err_impl! {pub(crate) CleanupError,
    #[error("more than one RDE with name '{0}' has been found")]
    DuplicateRde(String),

    #[error("vApp should be in RESOLVED state before it is deleted, but it is {0}")]
    VappNotResolved(String),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Target {
    pub org: String,
    pub vdc: String,
    pub rde_name: String,
    pub vapp_name: String,
}

pub async fn cmd(target: &Target, vcd: &dyn ControlPlane) -> EmptyResult {
    delete_capvcd_rde_by_name(vcd, &target.rde_name)
        .await
        .context("error deleting CAPVCD RDE")?;

    delete_vapp_by_name(vcd, &target.org, &target.vdc, &target.vapp_name)
        .await
        .context("error deleting vApp")
}

pub async fn delete_capvcd_rde_by_name(vcd: &dyn ControlPlane, rde_name: &str) -> EmptyResult {
    let rde_type = vcd
        .get_rde_type(CAPVCD_RDE_VENDOR, CAPVCD_RDE_NSS, CAPVCD_RDE_VERSION)
        .await
        .with_context(|| {
            format!("unable to get CAPVCD cluster RDE type {CAPVCD_RDE_VENDOR}:{CAPVCD_RDE_NSS}:{CAPVCD_RDE_VERSION}")
        })?;

    let rdes = match vcd.get_rdes_by_name(&rde_type, rde_name).await {
        Err(err) if is_not_found(&err) => vec![],
        res => res?,
    };

    // Names are supposed to be unique per cluster; if they aren't, we have no business
    // guessing which one is the right one to delete
    let rde = match rdes.as_slice() {
        [] => {
            println!("CAPVCD RDE '{rde_name}' not found, nothing to delete.");
            return Ok(());
        },
        [rde] => rde,
        _ => return Err(CleanupError::duplicate_rde(rde_name)),
    };

    println!("Deleting CAPVCD RDE '{rde_name}' ({})...", rde.id);
    vcd.delete_rde(rde)
        .await
        .with_context(|| format!("error deleting CAPVCD RDE with name {rde_name}"))?;

    println!("CAPVCD RDE '{rde_name}' successfully deleted.");
    Ok(())
}

pub async fn delete_vapp_by_name(vcd: &dyn ControlPlane, org_name: &str, vdc_name: &str, vapp_name: &str) -> EmptyResult {
    let org = vcd
        .get_org_by_name(org_name)
        .await
        .with_context(|| format!("error getting organization {org_name}"))?;

    let vdc = vcd
        .get_vdc_by_name(&org, vdc_name, false)
        .await
        .with_context(|| format!("error getting VDC {vdc_name}"))?;

    // Deleting the RDE can set off changes on the server side, so don't trust the VDC's
    // cached list of vApps
    let vapp = match vcd.get_vapp_by_name(&vdc, vapp_name, true).await {
        Err(err) if is_not_found(&err) => {
            println!("vApp '{vapp_name}' not found, nothing to delete.");
            return Ok(());
        },
        res => res?,
    };

    // Anything other than RESOLVED means the platform is still doing something to this vApp,
    // and we don't want to race it
    let status = vapp.status();
    println!("vApp state: '{status}'");
    if status != VAppStatus::Resolved {
        return Err(CleanupError::vapp_not_resolved(&status.to_string()));
    }

    println!("Deleting vApp '{vapp_name}'...");
    let task = vcd
        .delete_vapp(&vapp)
        .await
        .with_context(|| format!("error deleting vApp {vapp_name}"))?;

    vcd.wait_task_completion(&task)
        .await
        .context("error waiting for delete task completion")?;

    println!("vApp '{vapp_name}' successfully deleted.");
    Ok(())
}
