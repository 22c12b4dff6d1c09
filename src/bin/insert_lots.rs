use hashy::{Error, StepTable, Table, TABLE_SIZES};

use std::env;

use log::info;

const DEFAULT_SIZE_COUNT: usize = 11;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let sizes = match parse_sizes(env::args().skip(1)) {
        Ok(sizes) if sizes.is_empty() => TABLE_SIZES[..DEFAULT_SIZE_COUNT].to_vec(),
        Ok(sizes) => sizes,
        Err(arg) => return Err(Error::InvalidSizes(format!("{:?} is not a size", arg))),
    };

    let mut table = StepTable::with_sizes(sizes)?;
    let mut capacity = table.capacity();

    for i in 0usize.. {
        match table.set(format!("key{}", i), i) {
            Ok(_) => (),
            Err(Error::Full { capacity }) => {
                info!("table filled all {} slots", capacity);

                break;
            }
            Err(e) => return Err(e),
        }

        if table.capacity() != capacity {
            info!(
                "grew from {} to {} slots at {} entries",
                capacity,
                table.capacity(),
                table.len()
            );
            capacity = table.capacity();
        }
    }

    for i in (0..table.len()).step_by(2) {
        table.delete(&format!("key{}", i))?;
    }

    println!(
        "{} entries, {} slots, {} tombstones",
        table.len(),
        table.capacity(),
        table.tombstones()
    );

    Ok(())
}

fn parse_sizes(args: impl Iterator<Item = String>) -> Result<Vec<usize>, String> {
    args.map(|arg| arg.parse().map_err(|_| arg)).collect()
}
