// Cœur du simulateur : topologie, tables de routage et reconstruction de chemins.

pub mod topology;
pub mod routing_table;
pub mod path_calculation;
