use common_config_parser::types::{Config, ConfigPopulator};
use core_tx_populator::PopulatorConfig;
use protocol::types::U256;

pub(crate) fn register_log(config: &Config) {
    common_logger::init(
        config.logger.filter.clone(),
        config.logger.console_show_file_and_line,
        config.logger.modules_level.clone(),
    );
}

pub(crate) fn populator_config(config: &ConfigPopulator) -> PopulatorConfig {
    PopulatorConfig {
        default_gateway_fee:        U256::from(config.default_gateway_fee),
        fill_gateway_fee_recipient: config.fill_gateway_fee_recipient,
    }
}
