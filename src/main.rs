fn main() {
    awanku_lib::run()
}
