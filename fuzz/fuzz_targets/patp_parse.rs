use honggfuzz::fuzz;
use planetsieve::{num_to_patp, patp_to_num, patq_to_num, split};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(text) = std::str::from_utf8(data) {
                let _ = patq_to_num(text);
                let _ = split(text);
                if let Ok(value) = patp_to_num(text) {
                    assert_eq!(patp_to_num(&num_to_patp(value)), Ok(value));
                }
            }
        });
    }
}
