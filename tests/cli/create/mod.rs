mod batch_scheduler_contract;
mod generates_suite_for_fragments_contract;
mod site_config_precedence_contract;
