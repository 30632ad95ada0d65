fn main() {
    multiversx_sc_meta_lib::cli_main::<tree_planting_dao::AbiProvider>();
}
